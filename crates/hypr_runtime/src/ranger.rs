//! Toy three-column file browser over a hard-coded in-memory tree.
//!
//! The tree is static content; only the navigation state machine lives here.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
}

#[derive(Debug)]
/// One node of the static tree. Directories carry children, files a size
/// label; neither is ever mutated.
pub struct FileEntry {
    pub name: &'static str,
    pub kind: EntryKind,
    pub size: Option<&'static str>,
    pub children: &'static [FileEntry],
}

const fn dir(name: &'static str, children: &'static [FileEntry]) -> FileEntry {
    FileEntry {
        name,
        kind: EntryKind::Dir,
        size: None,
        children,
    }
}

const fn file(name: &'static str, size: &'static str) -> FileEntry {
    FileEntry {
        name,
        kind: EntryKind::File,
        size: Some(size),
        children: &[],
    }
}

/// The whole browsable filesystem.
pub static FILE_SYSTEM: FileEntry = dir(
    "home",
    &[dir(
        "zariel",
        &[
            dir(
                "projects",
                &[
                    file("zade-release", "1.2 MB"),
                    file("vintage-web", "850 KB"),
                    file("cassette-player", "2.1 MB"),
                ],
            ),
            file("about.md", "2 KB"),
            file("contact.md", "1 KB"),
            dir(".config", &[dir("hypr", &[]), dir("nvim", &[])]),
        ],
    )],
);

#[derive(Debug, Clone, PartialEq, Eq)]
/// Browser position: the directory path plus the highlighted entry name.
pub struct RangerState {
    pub path: Vec<&'static str>,
    pub selected: &'static str,
}

impl Default for RangerState {
    fn default() -> Self {
        Self {
            path: vec!["home", "zariel"],
            selected: "projects",
        }
    }
}

impl RangerState {
    /// Resolves the current directory against the static tree. The root
    /// segment is implicit; a segment that does not resolve is skipped and
    /// the walk continues from the last matching node.
    pub fn current_dir(&self) -> &'static FileEntry {
        let mut current = &FILE_SYSTEM;
        for segment in &self.path[1..] {
            if let Some(child) = current.children.iter().find(|c| c.name == *segment) {
                current = child;
            }
        }
        current
    }

    /// Highlights `name` and descends into it when it is a directory.
    /// Names not present in the current directory are ignored.
    pub fn navigate(&mut self, name: &str) {
        let Some(entry) = self.current_dir().children.iter().find(|c| c.name == name) else {
            return;
        };
        self.selected = entry.name;
        if entry.kind == EntryKind::Dir {
            self.path.push(entry.name);
        }
    }

    /// Steps one directory up, never above `/home/zariel`.
    pub fn back(&mut self) {
        if self.path.len() > 2 {
            self.path.pop();
        }
    }
}
