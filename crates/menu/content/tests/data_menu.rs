use std::path::Path;

use menu_content::{ContentLibrary, MenuFileLoader};
use menu_core::{Caller, DispatchOutcome, MenuCmdSet, MenuConfig, MenuSource, SessionRegistry};

#[derive(Default)]
struct Guest {
    inbox: Vec<String>,
    cmdsets: Vec<MenuCmdSet>,
    looks: usize,
}

impl Guest {
    fn last(&self) -> &str {
        self.inbox.last().map(String::as_str).unwrap_or_default()
    }
}

impl Caller for Guest {
    type Id = &'static str;

    fn id(&self) -> &'static str {
        "guest"
    }

    fn msg(&mut self, text: &str) {
        self.inbox.push(text.to_string());
    }

    fn look(&mut self) {
        self.looks += 1;
    }

    fn attach_cmdset(&mut self, cmdset: MenuCmdSet) {
        self.cmdsets.push(cmdset);
    }

    fn detach_cmdset(&mut self, key: &str) {
        self.cmdsets.retain(|cmdset| cmdset.key != key);
    }
}

fn demo_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../../demos"))
}

#[test]
fn demo_menu_file_is_complete() {
    let file = MenuFileLoader::load(&demo_dir().join("example.ron")).unwrap();
    assert!(file.dangling_targets().is_empty());
    assert!(file.node("start").is_some());
}

#[test]
fn data_menu_runs_through_a_session() {
    let library = ContentLibrary::from_dir::<Guest>(demo_dir()).unwrap();
    let mut registry = SessionRegistry::with_library(library);
    let mut guest = Guest::default();

    registry
        .start(&mut guest, MenuSource::path("example"), &MenuConfig::default())
        .unwrap();
    assert!(guest.last().contains(" View: Look around."));
    assert!(guest.last().contains(" 3: Read the help for this menu."));
    assert!(!guest.last().contains("_default"));

    registry.handle_input(&mut guest, "nothing useful").unwrap();
    assert!(guest.last().contains("\"nothing useful\""));

    registry.handle_input(&mut guest, "").unwrap();
    registry.handle_input(&mut guest, "3").unwrap();
    registry.handle_input(&mut guest, "help").unwrap();
    assert_eq!(
        guest.last(),
        "This is the help entry for this node. Press return to go back."
    );

    registry.handle_input(&mut guest, "").unwrap();
    let outcome = registry.handle_input(&mut guest, "q").unwrap();
    assert_eq!(outcome, DispatchOutcome::Close);
    assert!(guest.cmdsets.is_empty());
    assert_eq!(guest.looks, 1);
}
