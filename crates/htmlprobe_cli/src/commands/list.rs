//! List command implementation

use htmlprobe_core::FIXTURES;

pub fn run_list() {
    for fixture in FIXTURES {
        println!("{}\t{}", fixture.name, fixture.description);
    }
}
