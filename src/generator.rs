use crate::{
    commands::{Command, CommandKind},
    config::ScriptSettings,
    ids::IdSource,
    types::TransactionRecord,
};

/// Commands emitted for every transaction.
pub const COMMANDS_PER_TRANSACTION: usize = 11;

/// Builds the Selenium command sequence that types transactions into the app.
pub struct CommandGenerator<'a, I: IdSource> {
    settings: &'a ScriptSettings,
    ids: I,
}

impl<'a, I: IdSource> CommandGenerator<'a, I> {
    pub fn new(settings: &'a ScriptSettings, ids: I) -> Self {
        Self { settings, ids }
    }

    fn command(&mut self, kind: CommandKind, target: &str, value: &str) -> Command {
        Command::new(&mut self.ids, kind, target, value)
    }

    /// Click that opens the "new transaction" dialog; emitted once per file.
    pub fn open_dialog(&mut self) -> Command {
        let s = self.settings;
        self.command(CommandKind::Click, &s.open_dialog_button, "")
    }

    /// Steps that enter one transaction and wait for the app to confirm it.
    pub fn emit(&mut self, record: &TransactionRecord) -> Vec<Command> {
        let s = self.settings;
        let type_button = if record.is_expense() {
            &s.expense_button
        } else {
            &s.income_button
        };

        vec![
            self.command(CommandKind::Type, &s.date_field, &record.date),
            self.command(CommandKind::Type, &s.description_field, &record.description),
            self.command(CommandKind::Pause, &s.settle_pause_ms.to_string(), ""),
            self.command(CommandKind::Click, type_button, ""),
            // autocomplete: partial text first, then the full name
            self.command(CommandKind::Type, &s.country_field, &s.country_hint),
            self.command(CommandKind::Type, &s.country_field, &s.country_name),
            self.command(CommandKind::SendKeys, &s.country_field, &s.enter_key),
            self.command(CommandKind::Type, &s.amount_field, &record.amount),
            self.command(CommandKind::SendKeys, &s.amount_field, &s.enter_key),
            self.command(
                CommandKind::WaitForElementVisible,
                &s.success_indicator,
                &s.success_visible_timeout_ms.to_string(),
            ),
            self.command(
                CommandKind::WaitForElementNotVisible,
                &s.success_indicator,
                &s.success_hidden_timeout_ms.to_string(),
            ),
        ]
    }

    /// Full sequence for a file: one dialog click, then every record in order.
    pub fn sequence<'r>(
        &mut self,
        records: impl IntoIterator<Item = &'r TransactionRecord>,
    ) -> Vec<Command> {
        let mut commands = vec![self.open_dialog()];
        for record in records {
            commands.extend(self.emit(record));
        }
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{SequentialIds, UuidIds};
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::{collections::HashSet, str::FromStr};

    fn record(date: &str, description: &str, amount: &str) -> TransactionRecord {
        TransactionRecord {
            date: date.to_string(),
            description: description.to_string(),
            amount: amount.replace('.', ","),
            amount_signed: Decimal::from_str(amount).unwrap(),
        }
    }

    fn kinds(commands: &[Command]) -> Vec<CommandKind> {
        commands.iter().map(|c| c.command).collect()
    }

    #[test]
    fn test_emit_fixed_order() {
        let settings = ScriptSettings::default();
        let mut generator = CommandGenerator::new(&settings, SequentialIds::default());
        let commands = generator.emit(&record("15/03/2024", "Coffee Shop", "-20.00"));

        use CommandKind::*;
        assert_eq!(
            kinds(&commands),
            vec![
                Type,
                Type,
                Pause,
                Click,
                Type,
                Type,
                SendKeys,
                Type,
                SendKeys,
                WaitForElementVisible,
                WaitForElementNotVisible,
            ]
        );
        assert_eq!(commands.len(), COMMANDS_PER_TRANSACTION);

        let targets_values: Vec<(&str, &str)> = commands
            .iter()
            .map(|c| (c.target.as_str(), c.value.as_str()))
            .collect();
        assert_eq!(
            targets_values,
            vec![
                ("id=ext-comp-1814", "15/03/2024"),
                ("id=ext-comp-1816", "Coffee Shop"),
                ("1000", ""),
                ("id=ext-comp-1884", ""),
                ("id=ext-comp-1821", "Can"),
                ("id=ext-comp-1821", "Canada"),
                ("id=ext-comp-1821", "${KEY_ENTER}"),
                ("id=ext-comp-1825", "-20,00"),
                ("id=ext-comp-1825", "${KEY_ENTER}"),
                ("xpath=//*[contains(text(), 'adicionada com sucesso')]", "30000"),
                ("xpath=//*[contains(text(), 'adicionada com sucesso')]", "80000"),
            ]
        );
        assert!(commands.iter().all(|c| c.comment.is_empty() && c.targets.is_empty()));
    }

    #[rstest]
    #[case("-20.00", true)]
    #[case("-0.01", true)]
    #[case("0.00", false)]
    #[case("8.00", false)]
    fn test_expense_click_iff_negative(#[case] amount: &str, #[case] expense: bool) {
        let settings = ScriptSettings::default();
        let mut generator = CommandGenerator::new(&settings, SequentialIds::default());
        let commands = generator.emit(&record("01/01/2025", "x", amount));

        let clicks: Vec<&str> = commands
            .iter()
            .filter(|c| c.command == CommandKind::Click)
            .map(|c| c.target.as_str())
            .collect();
        let expected = if expense {
            settings.expense_button.as_str()
        } else {
            settings.income_button.as_str()
        };
        assert_eq!(clicks, vec![expected]);
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(5)]
    fn test_sequence_count(#[case] n: usize) {
        let settings = ScriptSettings::default();
        let records: Vec<TransactionRecord> = (0..n)
            .map(|i| record("01/01/2025", &format!("row {i}"), "1.00"))
            .collect();

        let mut generator = CommandGenerator::new(&settings, SequentialIds::default());
        let commands = generator.sequence(&records);

        assert_eq!(commands.len(), 1 + COMMANDS_PER_TRANSACTION * n);
        assert_eq!(commands[0].command, CommandKind::Click);
        assert_eq!(commands[0].target, settings.open_dialog_button);
    }

    #[test]
    fn test_sequence_preserves_row_order() {
        let settings = ScriptSettings::default();
        let records = vec![
            record("01/01/2025", "first", "1.00"),
            record("02/01/2025", "second", "1.00"),
            record("02/01/2025", "second", "1.00"),
        ];

        let mut generator = CommandGenerator::new(&settings, SequentialIds::default());
        let commands = generator.sequence(&records);

        let descriptions: Vec<&str> = commands
            .iter()
            .filter(|c| c.target == settings.description_field)
            .map(|c| c.value.as_str())
            .collect();
        assert_eq!(descriptions, vec!["first", "second", "second"]);
    }

    #[test]
    fn test_ids_unique_within_run() {
        let settings = ScriptSettings::default();
        let records: Vec<TransactionRecord> = (0..20)
            .map(|_| record("01/01/2025", "same", "-1.00"))
            .collect();

        let mut generator = CommandGenerator::new(&settings, UuidIds);
        let commands = generator.sequence(&records);
        let ids: HashSet<&str> = commands.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), commands.len());
    }

    #[test]
    fn test_custom_settings() {
        let settings = ScriptSettings {
            country_hint: "Bra".to_string(),
            country_name: "Brasil".to_string(),
            settle_pause_ms: 250,
            ..ScriptSettings::default()
        };
        let mut generator = CommandGenerator::new(&settings, SequentialIds::default());
        let commands = generator.emit(&record("01/01/2025", "x", "1.00"));

        assert_eq!(commands[2].target, "250");
        assert_eq!(commands[4].value, "Bra");
        assert_eq!(commands[5].value, "Brasil");
    }
}
