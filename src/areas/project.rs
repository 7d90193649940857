use crate::areas::git::Git;
use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Project {
    writer: RefCell<Box<dyn std::io::Write>>,
    error_writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
    git: Git,
}

impl Project {
    pub fn new(
        path: &str,
        writer: Box<dyn std::io::Write>,
        error_writer: Box<dyn std::io::Write>,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;

        let workspace = Workspace::new(path.clone().into_boxed_path());
        let git = Git::new(path.into_boxed_path());

        Ok(Project {
            writer: RefCell::new(writer),
            error_writer: RefCell::new(error_writer),
            workspace,
            git,
        })
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn error_writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.error_writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn git(&self) -> &Git {
        &self.git
    }
}
