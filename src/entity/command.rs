//! Invocable commands.

use crate::core::Identity;
use crate::entity::{Capabilities, Entity, EntityClass};
use crate::host::Creator;
use crate::status::{boundary, DiagResult, StatusCode};

/// Static description of a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandInfo {
    /// Command string
    pub identity: Identity,
    /// Whether the command supports undo
    pub undoable: bool,
}

impl CommandInfo {
    /// Create command info.
    pub fn new(command: &str, undoable: bool) -> Self {
        Self {
            identity: Identity::named(command),
            undoable,
        }
    }
}

/// Arguments passed to a command invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgList(Vec<String>);

impl ArgList {
    /// Create an argument list.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(args.into_iter().map(Into::into).collect())
    }

    /// Argument at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the arguments.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Command trait that all commands must implement.
///
/// `do_it` runs once per invocation. Undoable commands usually prepare in
/// `do_it` and apply in `redo_it`. The default hooks do nothing.
pub trait Command {
    /// Static description.
    fn info(&self) -> &CommandInfo;

    /// Execute the command.
    fn do_it(&mut self, args: &ArgList) -> DiagResult<()> {
        tracing::warn!(command = %self.info().identity, args = args.len(), "doIt requested but nothing to do");
        Ok(())
    }

    /// Re-apply after an undo.
    fn redo_it(&mut self) -> DiagResult<()> {
        tracing::warn!(command = %self.info().identity, "redoIt requested but nothing to do");
        Ok(())
    }

    /// Revert the command.
    fn undo_it(&mut self) -> DiagResult<()> {
        tracing::warn!(command = %self.info().identity, "undoIt requested but nothing to do");
        Ok(())
    }

    /// Whether the host should keep this invocation on its undo queue.
    fn is_undoable(&self) -> bool {
        self.info().undoable
    }
}

impl<'a> Entity for dyn Command + 'a {
    fn identity(&self) -> &Identity {
        &self.info().identity
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::Command {
            undoable: self.is_undoable(),
        }
    }
}

impl EntityClass for dyn Command {
    fn bind(create: fn() -> Box<Self>) -> Creator {
        Creator::Command(create)
    }
}

/// Run a command's `do_it` as a host-facing call.
pub fn execute(command: &mut dyn Command, args: &ArgList) -> StatusCode {
    let origin = command.info().identity.name.clone();
    boundary(&origin, || command.do_it(args))
}
