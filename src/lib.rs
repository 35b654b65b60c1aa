pub mod gameplay;
pub mod gameroom;
pub mod hands;

pub type Coordinate = f32;

/// seconds on the pre-round countdown clock
pub const COUNTDOWN: u8 = 3;

/// bootstrap the env_logger facade. call once, first thing in a binary.
pub fn log() {
    use std::io::Write;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{:<8}{}", record.level(), record.args()))
        .init();
}
