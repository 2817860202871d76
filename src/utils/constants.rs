use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env as std_env;

lazy_static! {
    pub static ref LOG_FILTER: String =
        load_or_default(env::LOG_FILTER_ENV_VAR, DEFAULT_LOG_FILTER);
}

fn load_env() {
    dotenv().ok();
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) if !value.is_empty() => value,
        _ => String::from(default_value),
    }
}

pub mod env {
    pub const LOG_FILTER_ENV_VAR: &str = "RUST_LOG";
}

pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const LOG_SEPARATOR_WIDTH: usize = 83;

pub const BANNER_CHAR: char = '=';
pub const BANNER_WIDTH: usize = 50;
pub const ROSTER_TITLE: &str = "TEAM ROSTER";

/// (name, role, favorite language) of the members present at start-up.
pub const SEED_MEMBERS: [(&str, &str, &str); 3] = [
    ("Alice Chen", "Senior Developer", "Python"),
    ("Bob Wang", "DevOps Engineer", "Go"),
    ("Carol Lin", "Frontend Developer", "JavaScript"),
];
