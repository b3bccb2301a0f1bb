use serde::{Deserialize, Serialize};

use crate::ids::IdSource;

/// Selenium IDE command names used by the generated scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandKind {
    Type,
    Click,
    Pause,
    SendKeys,
    WaitForElementVisible,
    WaitForElementNotVisible,
}

/// One replayable step. Field order matches the `.side` command layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub id: String,
    pub comment: String,
    pub command: CommandKind,
    pub target: String,
    pub targets: Vec<Vec<String>>,
    pub value: String,
}

impl Command {
    pub fn new(
        ids: &mut impl IdSource,
        command: CommandKind,
        target: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            id: ids.next_id(),
            comment: String::new(),
            command,
            target: target.into(),
            targets: Vec::new(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use rstest::rstest;

    #[rstest]
    #[case(CommandKind::Type, "\"type\"")]
    #[case(CommandKind::Click, "\"click\"")]
    #[case(CommandKind::Pause, "\"pause\"")]
    #[case(CommandKind::SendKeys, "\"sendKeys\"")]
    #[case(CommandKind::WaitForElementVisible, "\"waitForElementVisible\"")]
    #[case(CommandKind::WaitForElementNotVisible, "\"waitForElementNotVisible\"")]
    fn test_command_kind_names(#[case] kind: CommandKind, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
    }

    #[test]
    fn test_command_json_layout() {
        let mut ids = SequentialIds::default();
        let cmd = Command::new(&mut ids, CommandKind::Type, "id=ext-comp-1814", "15/03/2024");
        let json = serde_json::to_string(&cmd).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"id":"cmd-000001","comment":"","command":"type","#,
                r#""target":"id=ext-comp-1814","targets":[],"value":"15/03/2024"}"#,
            )
        );
    }
}
