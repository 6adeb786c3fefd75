use super::*;

#[test]
fn verbosity_raises_level() {
    assert_eq!(level_for(0, false), "warn");
    assert_eq!(level_for(1, false), "info");
    assert_eq!(level_for(2, false), "debug");
    assert_eq!(level_for(5, false), "debug");
}

#[test]
fn quiet_overrides_verbose() {
    assert_eq!(level_for(0, true), "error");
    assert_eq!(level_for(2, true), "error");
}

#[test]
fn init_twice_does_not_panic() {
    init(0, true);
    init(2, false);
}
