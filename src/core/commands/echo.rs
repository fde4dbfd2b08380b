use super::{Command, CommandError, Outcome};
use crate::core::env::Environment;

/// Prints its arguments, substituting `$NAME` tokens from the environment.
#[derive(Clone)]
pub struct EchoCommand;

impl Default for EchoCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl EchoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EchoCommand {
    fn execute(&self, args: &[String], env: &mut Environment) -> Result<Outcome, CommandError> {
        let env: &Environment = env;
        let words: Vec<_> = args
            .iter()
            .filter_map(|arg| env.expand_token(arg))
            .collect();

        let mut line = words.join(" ");
        line.push('\n');
        Ok(Outcome::Output(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(env: &mut Environment, args: &[&str]) -> Outcome {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        EchoCommand::new()
            .execute(&args, env)
            .expect("echo never fails")
    }

    #[test]
    fn test_echo_substitutes_variables() {
        let mut env = Environment::new();
        env.set("HOME", "/home/u").unwrap();

        assert_eq!(
            echo(&mut env, &["hello", "$HOME"]),
            Outcome::Output("hello /home/u\n".into())
        );
    }

    #[test]
    fn test_echo_drops_unset_variables() {
        let mut env = Environment::new();

        assert_eq!(
            echo(&mut env, &["a", "$UNSET", "b"]),
            Outcome::Output("a b\n".into())
        );
        assert_eq!(echo(&mut env, &["$UNSET"]), Outcome::Output("\n".into()));
    }

    #[test]
    fn test_echo_without_arguments() {
        let mut env = Environment::new();
        assert_eq!(echo(&mut env, &[]), Outcome::Output("\n".into()));
    }

    #[test]
    fn test_echo_only_whole_token_substitution() {
        let mut env = Environment::new();
        env.set("X", "1").unwrap();

        assert_eq!(
            echo(&mut env, &["pre$X", "$X", "&"]),
            Outcome::Output("pre$X 1 &\n".into())
        );
    }
}
