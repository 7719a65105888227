//! In-memory caller used by unit tests.

use std::collections::HashMap;

use crate::command::MenuCmdSet;
use crate::host::Caller;

#[derive(Debug, Default)]
pub struct TestCaller {
    pub id: u32,
    pub messages: Vec<String>,
    pub looks: usize,
    pub cmdsets: Vec<MenuCmdSet>,
    pub attrs: HashMap<String, String>,
}

impl TestCaller {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.attrs.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn last_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Caller for TestCaller {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn msg(&mut self, text: &str) {
        self.messages.push(text.to_string());
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
