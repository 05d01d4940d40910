//! Starter undoable command.

use crate::entity::{ArgList, Command, CommandInfo};
use crate::status::{DiagResult, Diagnostic, StatusCode};

/// Template command. Remembers its arguments in `do_it` and applies them in
/// `redo_it` so that undo/redo can replay the same invocation.
pub struct TemplateCommand {
    info: CommandInfo,
    args: ArgList,
    applied: bool,
}

impl TemplateCommand {
    pub const NAME: &'static str = "templateCommand";

    /// Creator handed to the host.
    pub fn create() -> Box<dyn Command> {
        Box::new(Self {
            info: CommandInfo::new(Self::NAME, true),
            args: ArgList::default(),
            applied: false,
        })
    }
}

impl Command for TemplateCommand {
    fn info(&self) -> &CommandInfo {
        &self.info
    }

    fn do_it(&mut self, args: &ArgList) -> DiagResult<()> {
        self.args = args.clone();
        self.redo_it()
    }

    fn redo_it(&mut self) -> DiagResult<()> {
        self.applied = true;
        tracing::info!(command = Self::NAME, args = self.args.len(), "applied");
        Ok(())
    }

    fn undo_it(&mut self) -> DiagResult<()> {
        if !self.applied {
            return Err(Diagnostic::new(StatusCode::Failure, "nothing to undo"));
        }
        self.applied = false;
        tracing::info!(command = Self::NAME, "reverted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{execute, Capabilities, Entity};

    #[test]
    fn test_undo_redo_cycle() {
        let mut cmd = TemplateCommand::create();
        assert!(cmd.is_undoable());
        assert_eq!(cmd.capabilities(), Capabilities::Command { undoable: true });

        assert_eq!(execute(cmd.as_mut(), &ArgList::new(["a"])), StatusCode::Success);
        assert!(cmd.undo_it().is_ok());
        assert!(cmd.redo_it().is_ok());
        assert!(cmd.undo_it().is_ok());
    }

    #[test]
    fn test_undo_without_do() {
        let mut cmd = TemplateCommand::create();
        let err = cmd.undo_it().unwrap_err();
        assert_eq!(err.status(), StatusCode::Failure);
        assert_eq!(err.message(), "nothing to undo");
    }
}
