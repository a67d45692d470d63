use super::*;

#[test]
fn default_level_is_warn() {
    assert_eq!(level_for(0, false), LevelFilter::WARN);
}

#[test]
fn verbosity_raises_level() {
    assert_eq!(level_for(1, false), LevelFilter::INFO);
    assert_eq!(level_for(2, false), LevelFilter::DEBUG);
    assert_eq!(level_for(3, false), LevelFilter::TRACE);
    assert_eq!(level_for(9, false), LevelFilter::TRACE);
}

#[test]
fn quiet_wins_over_verbose() {
    assert_eq!(level_for(2, true), LevelFilter::ERROR);
}

#[test]
fn init_twice_does_not_panic() {
    init(0, true);
    init(1, false);
}
