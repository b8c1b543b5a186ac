//! Integration tests for Reader.
//!
//! Tests construction, environment access and the zip family, all of which
//! run every part of a computation against the same environment.

use rstest::rstest;
use zipwise::effect::{Reader, zip2_in};
use zipwise::typeclass::{OptionKind, ResultKind};

#[derive(Clone)]
struct Config {
    host: String,
    port: u16,
    secure: bool,
}

fn config() -> Config {
    Config {
        host: "localhost".to_string(),
        port: 8080,
        secure: false,
    }
}

// =============================================================================
// Construction Tests
// =============================================================================

#[rstest]
fn new_and_run_with_struct_environment() {
    let reader: Reader<Config, String> =
        Reader::new(|config: Config| format!("{}:{}", config.host, config.port));
    assert_eq!(reader.run(config()), "localhost:8080");
}

#[rstest]
fn local_rewrites_environment_for_inner_computation() {
    let port = Reader::asks(|config: Config| config.port);
    let shifted = Reader::local(
        |mut config: Config| {
            config.port += 1;
            config
        },
        port,
    );
    assert_eq!(shifted.run(config()), 8081);
}

// =============================================================================
// Zip Tests
// =============================================================================

#[rstest]
fn zip3_with_reads_three_fields_of_same_environment() {
    let scheme = Reader::asks(|config: Config| if config.secure { "https" } else { "http" });
    let host = Reader::asks(|config: Config| config.host);
    let port = Reader::asks(|config: Config| config.port);

    let url = scheme.zip3_with(host, port, |scheme, host, port| {
        format!("{scheme}://{host}:{port}")
    });
    assert_eq!(url.run(config()), "http://localhost:8080");
}

#[rstest]
fn zip2_is_reusable_across_environments() {
    let host = Reader::asks(|config: Config| config.host);
    let secure = Reader::asks(|config: Config| config.secure);
    let pair = host.zip2(secure);

    assert_eq!(pair.run(config()), ("localhost".to_string(), false));
    let production = Config {
        host: "example.org".to_string(),
        port: 443,
        secure: true,
    };
    assert_eq!(pair.run(production), ("example.org".to_string(), true));
}

#[rstest]
fn zip3_equals_nested_zip2() {
    let first: Reader<i32, i32> = Reader::new(|environment| environment + 1);
    let second: Reader<i32, i32> = Reader::new(|environment| environment * 2);
    let third: Reader<i32, i32> = Reader::new(|environment| environment - 3);

    let direct = first.clone().zip3(second.clone(), third.clone());
    let nested = first
        .zip2(second)
        .zip2(third)
        .fmap(|((a, b), c)| (a, b, c));
    assert_eq!(direct.run(10), nested.run(10));
}

// =============================================================================
// Sequence Tests
// =============================================================================

#[rstest]
fn sequence_runs_every_reader_in_order() {
    let readers = vec![
        Reader::asks(|config: Config| config.host),
        Reader::asks(|config: Config| config.port.to_string()),
        Reader::pure("static".to_string()),
    ];
    assert_eq!(
        Reader::sequence(readers).run(config()),
        vec!["localhost".to_string(), "8080".to_string(), "static".to_string()]
    );
}

#[rstest]
fn sequence_of_nothing_returns_empty_list() {
    let readers: Vec<Reader<Config, u16>> = Vec::new();
    assert!(Reader::sequence(readers).run(config()).is_empty());
}

// =============================================================================
// Nested Kind Tests
// =============================================================================

#[rstest]
fn zip2_in_option_requires_both_lookups() {
    let port = Reader::asks(|config: Config| (config.port != 0).then_some(config.port));
    let tls = Reader::asks(|config: Config| config.secure.then_some("tls"));
    let both = zip2_in::<OptionKind, _, _, _>(port, tls);

    assert_eq!(both.run(config()), None);
    let secure = Config {
        secure: true,
        ..config()
    };
    assert_eq!(both.run(secure), Some((8080, "tls")));
}

#[rstest]
fn zip2_in_result_short_circuits_on_first_failure() {
    let host: Reader<Config, Result<String, &str>> =
        Reader::asks(|config: Config| Ok(config.host));
    let port: Reader<Config, Result<u16, &str>> = Reader::pure(Err("port not configured"));
    let address = zip2_in::<ResultKind<&str>, _, _, _>(host, port);
    assert_eq!(address.run(config()), Err("port not configured"));
}
