//! Parses `key=value` lines into a small server config using `Outcome`
//! combinators only, with no early returns.

use outcome_rail::Outcome;

#[derive(Debug)]
struct ServerConfig {
    host: String,
    port: u16,
}

#[derive(Debug)]
enum ConfigError {
    MissingKey(&'static str),
    BadPort(String),
    Privileged(u16),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingKey(key) => write!(f, "missing key `{key}`"),
            ConfigError::BadPort(msg) => write!(f, "bad port: {msg}"),
            ConfigError::Privileged(port) => write!(f, "port {port} is privileged"),
        }
    }
}

fn lookup<'a>(input: &'a str, key: &'static str) -> Outcome<ConfigError, &'a str> {
    let value = input
        .lines()
        .filter_map(|line| line.split_once('='))
        .find(|(k, _)| k.trim() == key)
        .map(|(_, v)| v.trim());
    Outcome::from_maybe(ConfigError::MissingKey(key), value)
}

fn parse_port(raw: &str) -> Outcome<ConfigError, u16> {
    Outcome::from(raw.parse::<u16>())
        .format(|e| ConfigError::BadPort(format!("{raw}: {e}")))
        .chain(|port| {
            if port < 1024 {
                Outcome::error(ConfigError::Privileged(port))
            } else {
                Outcome::ok(port)
            }
        })
}

fn parse(input: &str) -> Outcome<ConfigError, ServerConfig> {
    let host = lookup(input, "host").or(Outcome::<ConfigError, &str>::ok("127.0.0.1"));
    let port = lookup(input, "port")
        .chain(parse_port)
        .capture(|e| match e {
            ConfigError::MissingKey(_) => Outcome::ok(8080),
            other => Outcome::error(other),
        });

    host.chain(|host| {
        port.map(|port| ServerConfig {
            host: host.to_string(),
            port,
        })
    })
}

fn main() {
    let inputs = [
        "host = example.org\nport = 8443",
        "port = 80",
        "port = eighty",
        "host = localhost",
    ];

    for input in inputs {
        match parse(input) {
            Outcome::Ok(config) => println!("ok:  {}:{}", config.host, config.port),
            Outcome::Err(err) => println!("err: {err}"),
        }
    }
}
