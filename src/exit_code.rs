use crate::error::RquestsError;

pub fn exit_code_for_error(err: &RquestsError) -> i32 {
    match err {
        RquestsError::InvalidUrl(_) => 3,
        RquestsError::Configurator(_)
        | RquestsError::InvalidMethod(_)
        | RquestsError::InvalidHeader(_)
        | RquestsError::Config(_) => 2,
        RquestsError::Proxy(_) => 5,
        RquestsError::Timeout => 28,
        RquestsError::Io(_) => 23,
        RquestsError::Json(_) | RquestsError::Encoding(_) => 26,
        RquestsError::Transport(_) => 7,
        RquestsError::Http(err) => http_exit_code(err),
    }
}

fn http_exit_code(err: &reqwest::Error) -> i32 {
    if err.is_timeout() {
        return 28;
    }
    if err.is_connect() {
        return 7;
    }
    if err.is_builder() || err.is_request() {
        return 2;
    }
    56
}
