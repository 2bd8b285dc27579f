//! Application
//!
//! The `Vertigo` command as a host file browser invokes it.

mod config;
mod host;

use tracing::{debug, warn};

use crate::input::{InputSession, Outcome, RawTerminal};
use crate::motion::{Direction, Numbering};
use crate::translate::Alphabet;

pub use config::{ConfigError, ConfigResult, VertigoConfig};
pub use host::{Host, KeyBindingRegistry, Severity};

const PREFIX: &str = "Vertigo";

pub struct Vertigo {
    config: VertigoConfig,
    alphabet: Alphabet,
}

impl Vertigo {
    pub fn new(config: VertigoConfig) -> ConfigResult<Self> {
        let alphabet = config.validate()?;
        Ok(Self { config, alphabet })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Bind the up and down keys
    pub fn install_key_bindings<R: KeyBindingRegistry + ?Sized>(&self, registry: &mut R) {
        registry.register_key_binding(self.config.up_key, Direction::Up);
        registry.register_key_binding(self.config.down_key, Direction::Down);
    }

    /// Run one invocation: read a count, notify, and move.
    ///
    /// Failures never escape; they come back as the outcome and a notification.
    pub fn execute<H, T>(&self, host: &mut H, terminal: &mut T, direction: Direction) -> Outcome
    where
        H: Host + ?Sized,
        T: RawTerminal + ?Sized,
    {
        let numbering = host.numbering();
        let outcome = if numbering == Numbering::Disabled {
            Outcome::PreconditionFailed
        } else {
            self.collect(terminal, direction, numbering)
        };
        debug!(?outcome, %direction, "vertigo finished");

        self.report(host, &outcome);
        if let Some(movement) = outcome.movement() {
            host.apply(movement);
        }
        outcome
    }

    fn collect<T: RawTerminal + ?Sized>(
        &self,
        terminal: &mut T,
        direction: Direction,
        numbering: Numbering,
    ) -> Outcome {
        match InputSession::new(&self.alphabet, direction).collect(terminal) {
            Ok(Outcome::Resolved(requested)) => Outcome::Resolved(requested.resolve(numbering)),
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "vertigo input failed");
                Outcome::Faulted(e.to_string())
            }
        }
    }

    fn report<H: Host + ?Sized>(&self, host: &mut H, outcome: &Outcome) {
        let (message, severity) = match outcome {
            Outcome::Resolved(movement) => (movement.to_string(), Severity::Normal),
            Outcome::Canceled => ("Canceled".to_string(), Severity::Attention),
            Outcome::Untranslatable => ("Untranslatable".to_string(), Severity::Attention),
            Outcome::PreconditionFailed => {
                ("requires line numbering".to_string(), Severity::Attention)
            }
            Outcome::Faulted(reason) => (format!("input failed: {}", reason), Severity::Attention),
        };
        self.notify(host, &message, severity);
    }

    fn notify<H: Host + ?Sized>(&self, host: &mut H, message: &str, severity: Severity) {
        if self.config.quiet {
            return;
        }
        host.notify(&format!("{} {}", PREFIX, message), severity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::testing::ScriptedTerminal;
    use crate::input::Keystroke;
    use crate::motion::Movement;

    struct RecordingHost {
        numbering: Numbering,
        movements: Vec<Movement>,
        notices: Vec<(String, Severity)>,
    }

    impl RecordingHost {
        fn new(numbering: Numbering) -> Self {
            Self { numbering, movements: Vec::new(), notices: Vec::new() }
        }
    }

    impl Host for RecordingHost {
        fn numbering(&self) -> Numbering {
            self.numbering
        }

        fn apply(&mut self, movement: Movement) {
            self.movements.push(movement);
        }

        fn notify(&mut self, message: &str, severity: Severity) {
            self.notices.push((message.to_string(), severity));
        }
    }

    #[derive(Default)]
    struct Bindings(Vec<(char, Direction)>);

    impl KeyBindingRegistry for Bindings {
        fn register_key_binding(&mut self, key: char, direction: Direction) {
            self.0.push((key, direction));
        }
    }

    fn vertigo() -> Vertigo {
        Vertigo::new(VertigoConfig::default()).unwrap()
    }

    fn run(numbering: Numbering, typed: &str, direction: Direction) -> (Outcome, RecordingHost) {
        let mut host = RecordingHost::new(numbering);
        let mut terminal = ScriptedTerminal::typing(typed);
        let outcome = vertigo().execute(&mut host, &mut terminal, direction);
        (outcome, host)
    }

    #[test]
    fn test_relative_up() {
        let (outcome, host) = run(Numbering::Relative, "as", Direction::Up);

        assert_eq!(outcome, Outcome::Resolved(Movement::up(12)));
        assert_eq!(host.movements, vec![Movement::up(12)]);
        assert_eq!(host.notices, vec![("Vertigo Up 12".to_string(), Severity::Normal)]);
    }

    #[test]
    fn test_relative_down_shorthand() {
        let (_, host) = run(Numbering::Relative, "J", Direction::Down);

        assert_eq!(host.movements, vec![Movement::down(7)]);
        assert_eq!(host.notices[0].0, "Vertigo Down 7");
    }

    #[test]
    fn test_absolute_downgrades_to_jump() {
        let (outcome, host) = run(Numbering::Absolute, "G", Direction::Up);

        assert_eq!(outcome, Outcome::Resolved(Movement::to(5)));
        assert_eq!(host.movements, vec![Movement::to(5)]);
        assert_eq!(host.notices[0].0, "Vertigo To 5");
    }

    #[test]
    fn test_to_is_absolute_in_relative_mode() {
        let (_, host) = run(Numbering::Relative, "ah", Direction::To);
        assert_eq!(host.movements, vec![Movement::to(16)]);
    }

    #[test]
    fn test_disabled_numbering_reads_nothing() {
        let mut host = RecordingHost::new(Numbering::Disabled);
        let mut terminal = ScriptedTerminal::typing("as");

        let outcome = vertigo().execute(&mut host, &mut terminal, Direction::Up);

        assert_eq!(outcome, Outcome::PreconditionFailed);
        assert_eq!(terminal.reads, 0);
        assert_eq!(terminal.entered, 0);
        assert!(host.movements.is_empty());
        assert_eq!(
            host.notices,
            vec![("Vertigo requires line numbering".to_string(), Severity::Attention)]
        );
    }

    #[test]
    fn test_cancel_and_untranslatable_do_not_move() {
        let mut host = RecordingHost::new(Numbering::Relative);
        let mut terminal = ScriptedTerminal::new([Keystroke::Escape]);
        let outcome = vertigo().execute(&mut host, &mut terminal, Direction::Down);

        assert_eq!(outcome, Outcome::Canceled);
        assert!(host.movements.is_empty());
        assert_eq!(host.notices, vec![("Vertigo Canceled".to_string(), Severity::Attention)]);
        assert_eq!(terminal.left, 1);

        let (outcome, host) = run(Numbering::Relative, "zz", Direction::Down);
        assert_eq!(outcome, Outcome::Untranslatable);
        assert!(host.movements.is_empty());
        assert_eq!(host.notices, vec![("Vertigo Untranslatable".to_string(), Severity::Attention)]);
    }

    #[test]
    fn test_terminal_fault_is_reported() {
        let mut host = RecordingHost::new(Numbering::Relative);
        let mut terminal = ScriptedTerminal::typing("as").failing_read();

        let outcome = vertigo().execute(&mut host, &mut terminal, Direction::Up);

        assert!(matches!(outcome, Outcome::Faulted(_)));
        assert!(host.movements.is_empty());
        assert_eq!(host.notices.len(), 1);
        assert!(host.notices[0].0.starts_with("Vertigo input failed"));
        assert_eq!(terminal.left, 1);
    }

    #[test]
    fn test_one_notice_at_most_one_move() {
        let cases = [
            (Numbering::Relative, "as"),
            (Numbering::Absolute, "K"),
            (Numbering::Relative, "qq"),
            (Numbering::Disabled, "as"),
        ];
        for (numbering, typed) in cases {
            let (outcome, host) = run(numbering, typed, Direction::Down);
            assert_eq!(host.notices.len(), 1, "{:?}", outcome);
            assert!(host.movements.len() <= 1);
            assert_eq!(host.movements.first().copied(), outcome.movement());
        }
    }

    #[test]
    fn test_quiet_suppresses_notices() {
        let config = VertigoConfig { quiet: true, ..VertigoConfig::default() };
        let vertigo = Vertigo::new(config).unwrap();

        for (numbering, typed) in [(Numbering::Relative, "as"), (Numbering::Disabled, ""), (Numbering::Relative, "xx")] {
            let mut host = RecordingHost::new(numbering);
            let mut terminal = ScriptedTerminal::typing(typed);
            vertigo.execute(&mut host, &mut terminal, Direction::Up);
            assert!(host.notices.is_empty());
        }
    }

    #[test]
    fn test_install_key_bindings() {
        let mut bindings = Bindings::default();
        vertigo().install_key_bindings(&mut bindings);
        assert_eq!(bindings.0, vec![('K', Direction::Up), ('J', Direction::Down)]);

        let config = VertigoConfig { up_key: 'U', down_key: 'D', ..VertigoConfig::default() };
        let mut bindings = Bindings::default();
        Vertigo::new(config).unwrap().install_key_bindings(&mut bindings);
        assert_eq!(bindings.0, vec![('U', Direction::Up), ('D', Direction::Down)]);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = VertigoConfig { homerow: "abc".to_string(), ..VertigoConfig::default() };
        assert!(matches!(Vertigo::new(config), Err(ConfigError::Alphabet(_))));
    }
}
