//! Handlers for the commands that live in the cli itself.

use std::collections::BTreeMap;

use assist_common::utils::{
    env::{env_vars, expand, get_env},
    path::{make_relative_path, path_elements, resolve_path, split_path, split_path_elements},
    random::Generator,
};
use assist_config::Configuration;
use colored::Colorize;
use tracing::debug;

use crate::{
    args::{EnvAction, EnvArgs, PathAction, PathArgs, RandomAction, RandomArgs},
    error::Error,
};

/// Runs a path command, returning the lines to print.
pub(crate) fn path(args: PathArgs) -> Result<Vec<String>, Error> {
    Ok(match args.action {
        PathAction::Resolve { path } => vec![resolve_path(&path)],
        PathAction::Relative { base, target } => {
            vec![make_relative_path(&base, &target).ok_or_else(|| {
                Error::Generic(format!(
                    "cannot express '{}' relative to '{}'. both paths must be absolute and share a root",
                    target, base
                ))
            })?]
        }
        PathAction::Split { path } => {
            let (folder, name) = split_path(&path);
            vec![folder, name]
        }
        PathAction::Elements { path, cumulative: true } => path_elements(&path),
        PathAction::Elements { path, cumulative: false } => split_path_elements(&path),
    })
}

/// Runs an env command, returning the lines to print.
pub(crate) fn env(args: EnvArgs) -> Result<Vec<String>, Error> {
    Ok(match args.action {
        EnvAction::Get { name } => vec![get_env(&name)
            .ok_or_else(|| Error::Generic(format!("environment variable '{}' is not set", name)))?],
        EnvAction::Expand { text } => vec![expand(&text)],
        EnvAction::List { json: true } => {
            let variables: BTreeMap<String, String> = env_vars().into_iter().collect();
            vec![serde_json::to_string_pretty(&variables)?]
        }
        EnvAction::List { json: false } => env_vars()
            .into_iter()
            .map(|(name, value)| format!("{}={}", name.bold(), value))
            .collect(),
    })
}

/// Runs a random command. An explicit `--seed` takes precedence over the configured seed.
pub(crate) fn random(args: RandomArgs, configuration: &Configuration) -> Result<String, Error> {
    let seed = if args.seed != 0 { args.seed } else { configuration.random_seed };
    debug!("seeding generator with {}", seed);
    let mut generator = Generator::from_optional_seed(seed);

    match args.action {
        RandomAction::Int { min, max } => Ok(generator.int(min, max).to_string()),
        RandomAction::String { length, symbols } => {
            let symbols = if symbols.is_empty() { &configuration.random_symbols } else { &symbols };
            if symbols.is_empty() {
                return Err(Error::Generic("no symbols to pick from".to_string()));
            }
            Ok(generator.string_from(length, symbols))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assist_common::utils::env::set_env;
    use serial_test::serial;

    fn path_lines(action: PathAction) -> Vec<String> {
        path(PathArgs { action }).expect("failed to run path command")
    }

    #[cfg(unix)]
    #[test]
    fn test_path_commands() {
        assert_eq!(
            path_lines(PathAction::Resolve { path: "/foo/bar/../baz/myapp".into() }),
            vec!["/foo/baz/myapp"]
        );
        assert_eq!(
            path_lines(PathAction::Relative { base: "/usr/bin".into(), target: "/usr/sbin".into() }),
            vec!["../sbin"]
        );
        assert_eq!(path_lines(PathAction::Split { path: "/foo/bar.txt".into() }), vec!["/foo", "bar.txt"]);
        assert_eq!(
            path_lines(PathAction::Elements { path: "/usr/bin".into(), cumulative: false }),
            vec!["/", "usr", "bin"]
        );
        assert_eq!(
            path_lines(PathAction::Elements { path: "/usr/bin".into(), cumulative: true }),
            vec!["/usr", "/usr/bin"]
        );
    }

    #[test]
    fn test_relative_path_requires_absolute_paths() {
        let action = PathAction::Relative { base: "usr/bin".into(), target: "usr/sbin".into() };
        assert!(path(PathArgs { action }).is_err());
    }

    #[test]
    #[serial]
    fn test_env_commands() {
        set_env("ASSIST_CLI_TEST_VAR", "value");

        let lines = env(EnvArgs { action: EnvAction::Get { name: "ASSIST_CLI_TEST_VAR".into() } })
            .expect("failed to run env command");
        assert_eq!(lines, vec!["value"]);

        let lines = env(EnvArgs { action: EnvAction::List { json: true } })
            .expect("failed to run env command");
        let variables: BTreeMap<String, String> =
            serde_json::from_str(&lines[0]).expect("invalid json");
        assert_eq!(variables.get("ASSIST_CLI_TEST_VAR").map(String::as_str), Some("value"));

        set_env("ASSIST_CLI_TEST_VAR", "");
        assert!(env(EnvArgs { action: EnvAction::Get { name: "ASSIST_CLI_TEST_VAR".into() } })
            .is_err());
    }

    #[test]
    fn test_random_is_reproducible_with_seed() {
        let configuration = Configuration::default();
        let run = |seed| {
            random(
                RandomArgs { seed, action: RandomAction::String { length: 16, symbols: "".into() } },
                &configuration,
            )
            .expect("failed to run random command")
        };

        assert_eq!(run(42), run(42));
        assert_eq!(run(42).chars().count(), 16);
    }

    #[test]
    fn test_random_falls_back_to_configuration() {
        let configuration =
            Configuration { random_seed: 7, random_symbols: "ab".into(), ..Default::default() };

        let first = random(
            RandomArgs { seed: 0, action: RandomAction::String { length: 32, symbols: "".into() } },
            &configuration,
        )
        .expect("failed to run random command");
        let second = random(
            RandomArgs { seed: 0, action: RandomAction::String { length: 32, symbols: "".into() } },
            &configuration,
        )
        .expect("failed to run random command");
        assert_eq!(first, second);
        assert!(first.chars().all(|c| c == 'a' || c == 'b'));

        let value: i64 = random(
            RandomArgs { seed: 0, action: RandomAction::Int { min: 5, max: -5 } },
            &configuration,
        )
        .expect("failed to run random command")
        .parse()
        .expect("not an integer");
        assert!((-5..=5).contains(&value));
    }

    #[test]
    fn test_random_rejects_empty_symbols() {
        let configuration = Configuration { random_symbols: "".into(), ..Default::default() };
        let args = RandomArgs { seed: 1, action: RandomAction::String { length: 4, symbols: "".into() } };
        assert!(random(args, &configuration).is_err());
    }
}
