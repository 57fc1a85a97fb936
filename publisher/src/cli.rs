//! Positional-argument helpers shared by the example binaries.
//!
//! Each binary takes zero or more positional arguments; the defaults match
//! the upstream tutorials. Derivation happens once at the binary boundary,
//! never inside the publish path.

/// Message body: remaining arguments joined with spaces, or `"hello....."`.
pub fn body_or_default(args: &[String]) -> String {
    let body = args.join(" ");
    if body.is_empty() {
        "hello.....".to_string()
    } else {
        body
    }
}

/// Topic routing key: the first argument, or `"info"`.
pub fn severity_or_default(args: &[String]) -> String {
    match args.first() {
        Some(s) if !s.is_empty() => s.clone(),
        _ => "info".to_string(),
    }
}
