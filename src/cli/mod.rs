//! CLI argument parsing module
//!
//! This module handles command-line argument parsing and application entry point.

use crate::blocking::Requests;
use crate::config::{RequestOptions, StringMap};
use crate::error::Result;
use crate::exit_code::exit_code_for_error;
use crate::options::{self, Configurator};
use crate::output::{OutputConfig, OutputWriter};
use crate::utils::{FileUtils, StringUtils, UrlUtils};
use clap::{Arg, ArgAction, ArgMatches, Command};

/// Main entry point for the CLI application
pub fn run() {
    crate::logging::init();

    let matches = create_app().get_matches();

    if let Err(e) = run_with_args(&matches) {
        let errors = OutputWriter::new(OutputConfig {
            file: None,
            silent: matches.get_flag("silent"),
        });
        errors.write_error(&e.to_string());
        std::process::exit(exit_code_for_error(&e));
    }
}

/// Run rquests with parsed command line arguments
fn run_with_args(matches: &ArgMatches) -> Result<()> {
    let writer = OutputWriter::new(output_config(matches)?);
    let invocation = Invocation::from_matches(matches)?;
    let requests = Requests::with_options(invocation.initial)?;
    let response = requests.request(
        &invocation.method,
        &invocation.url,
        &invocation.configurators,
    )?;
    writer.write(response.content())
}

/// Create the CLI application structure
pub fn create_app() -> Command {
    Command::new("rquests")
        .version(crate::VERSION)
        .about("Send one HTTP request built from request options")
        .arg(
            Arg::new("url")
                .help("The URL to request")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("request")
                .short('X')
                .long("request")
                .value_name("METHOD")
                .help("HTTP request method, sent exactly as given")
                .default_value("GET"),
        )
        .arg(
            Arg::new("header")
                .short('H')
                .long("header")
                .value_name("HEADER")
                .help("Add custom HTTP header ('Name: value')")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("cookie")
                .short('b')
                .long("cookie")
                .value_name("NAME=VALUE")
                .help("Send a cookie")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("param")
                .short('G')
                .long("param")
                .value_name("KEY=VALUE")
                .help("Add a query parameter")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("form")
                .short('F')
                .long("form")
                .value_name("KEY=VALUE")
                .help("Add a URL-encoded form field")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .value_name("KEY=VALUE")
                .help("Add a JSON body field (replaces any form body)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("proxy")
                .short('x')
                .long("proxy")
                .value_name("URL")
                .help("Use proxy server"),
        )
        .arg(
            Arg::new("timeout")
                .short('m')
                .long("timeout")
                .value_name("SECONDS")
                .help("Maximum time for the whole request, 0 for none (suffixes s/m/h)"),
        )
        .arg(
            Arg::new("options-file")
                .long("options-file")
                .value_name("FILE")
                .env("RQUESTS_OPTIONS_FILE")
                .help("JSON object of request options applied before other flags"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write output to file"),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Silent mode")
                .action(ArgAction::SetTrue),
        )
}

fn output_config(matches: &ArgMatches) -> Result<OutputConfig> {
    let file = match matches.get_one::<String>("output") {
        Some(path) => Some(FileUtils::expand_path(path)?),
        None => None,
    };
    Ok(OutputConfig {
        file,
        silent: matches.get_flag("silent"),
    })
}

/// One request as described on the command line
pub struct Invocation {
    pub method: String,
    pub url: String,
    pub initial: RequestOptions,
    pub configurators: Vec<Configurator>,
}

impl Invocation {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let url = match matches.get_one::<String>("url") {
            Some(url_str) => UrlUtils::validate_url(url_str)?.to_string(),
            None => String::new(),
        };

        let method = matches
            .get_one::<String>("request")
            .cloned()
            .unwrap_or_else(|| "GET".to_string());

        let initial = match matches.get_one::<String>("options-file") {
            Some(path) => {
                let path = FileUtils::expand_path(path)?;
                FileUtils::check_file_readable(&path)?;
                RequestOptions::from_json_file(&path)?
            }
            None => RequestOptions::default(),
        };

        let mut configurators = Vec::new();

        if let Some(timeout_str) = matches.get_one::<String>("timeout") {
            let timeout = StringUtils::parse_timeout(timeout_str)?;
            configurators.push(options::timeout(timeout.as_secs()));
        }

        if let Some(proxy) = matches.get_one::<String>("proxy") {
            configurators.push(options::proxy(proxy.clone()));
        }

        if let Some(values) = matches.get_many::<String>("header") {
            let mut headers = StringMap::new();
            for header_str in values {
                let (key, value) = StringUtils::parse_header(header_str)?;
                headers.insert(key, value);
            }
            configurators.push(options::headers(headers));
        }

        if let Some(cookies) = pairs(matches, "cookie")? {
            configurators.push(options::cookies(cookies));
        }
        if let Some(params) = pairs(matches, "param")? {
            configurators.push(options::params(params));
        }
        if let Some(form) = pairs(matches, "form")? {
            configurators.push(options::form(form));
        }
        if let Some(data) = pairs(matches, "data")? {
            configurators.push(options::data(data));
        }

        Ok(Self {
            method,
            url,
            initial,
            configurators,
        })
    }
}

fn pairs(matches: &ArgMatches, id: &str) -> Result<Option<StringMap>> {
    let Some(values) = matches.get_many::<String>(id) else {
        return Ok(None);
    };
    let mut map = StringMap::new();
    for value in values {
        let (key, value) = StringUtils::parse_pair(value)?;
        map.insert(key, value);
    }
    Ok(Some(map))
}

#[cfg(test)]
mod tests {
    use super::{create_app, output_config, Invocation};
    use crate::error::RquestsError;
    use crate::options::fold;
    use std::fs;
    use tempfile::tempdir;

    fn invocation(args: &[&str]) -> crate::error::Result<Invocation> {
        let matches = create_app()
            .try_get_matches_from(std::iter::once("rquests").chain(args.iter().copied()))
            .expect("arguments parse");
        Invocation::from_matches(&matches)
    }

    #[test]
    fn flags_become_configurators() {
        let invocation = invocation(&[
            "example.com/p",
            "-X",
            "Post",
            "-H",
            "X-Test: 1",
            "-b",
            "user=solos",
            "-G",
            "q=x",
            "-F",
            "a=1",
            "-d",
            "b=2",
            "-m",
            "2m",
        ])
        .expect("invocation");

        assert_eq!(invocation.method, "Post");
        assert_eq!(invocation.url, "http://example.com/p");

        let options = fold(&invocation.initial, &invocation.configurators).expect("fold");
        assert_eq!(options.timeout, Some(120));
        assert_eq!(
            options.headers.as_ref().and_then(|h| h.get("X-Test")),
            Some(&"1".to_string())
        );
        assert!(options.cookies.is_some());
        assert!(options.params.is_some());
        assert!(options.form.is_some());
        assert!(options.data.is_some());
    }

    #[test]
    fn flags_override_options_file() {
        let temp = tempdir().expect("tempdir");
        let path = temp.path().join("options.json");
        fs::write(&path, r#"{"timeout": 5, "headers": {"A": "1"}}"#).expect("write");

        let invocation = invocation(&[
            "http://example.com",
            "--options-file",
            path.to_str().expect("utf-8 path"),
            "-m",
            "10",
        ])
        .expect("invocation");

        assert_eq!(invocation.initial.timeout, Some(5));
        let options = fold(&invocation.initial, &invocation.configurators).expect("fold");
        assert_eq!(options.timeout, Some(10));
        assert!(options.headers.is_some());
    }

    #[test]
    fn output_path_is_resolved_before_the_request() {
        let home = dirs::home_dir().expect("home dir");
        let matches = create_app()
            .try_get_matches_from(["rquests", "http://example.com", "-o", "~/out.txt", "-s"])
            .expect("arguments parse");
        let config = output_config(&matches).expect("output config");
        assert_eq!(config.file, Some(home.join("out.txt")));
        assert!(config.silent);

        let matches = create_app()
            .try_get_matches_from(["rquests", "http://example.com"])
            .expect("arguments parse");
        assert_eq!(output_config(&matches).expect("output config").file, None);
    }

    #[test]
    fn malformed_fields_are_config_errors() {
        let err = invocation(&["http://example.com", "-d", "novalue"])
            .err()
            .expect("bad field");
        assert!(matches!(err, RquestsError::Config(_)));

        let err = invocation(&["http://example.com", "-H", "novalue"])
            .err()
            .expect("bad header");
        assert!(matches!(err, RquestsError::Config(_)));
    }
}
