//! Native Windows registry backend.

use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ};
use winreg::RegKey;

use super::{ConfigKey, ConfigTree, Value};

/// `HKEY_LOCAL_MACHINE`, opened read-only.
pub struct LocalMachine {
    hklm: RegKey,
}

impl LocalMachine {
    /// Attach to the predefined local-machine hive.
    pub fn new() -> Self {
        Self {
            hklm: RegKey::predef(HKEY_LOCAL_MACHINE),
        }
    }
}

impl Default for LocalMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigTree for LocalMachine {
    fn open(&self, path: &str) -> Option<Box<dyn ConfigKey + '_>> {
        self.hklm.open_child(path)
    }
}

impl ConfigKey for RegKey {
    fn open_child(&self, name: &str) -> Option<Box<dyn ConfigKey + '_>> {
        match self.open_subkey_with_flags(name.trim_end_matches('\\'), KEY_READ) {
            Ok(key) => Some(Box::new(key) as Box<dyn ConfigKey + '_>),
            Err(e) => {
                tracing::debug!("Registry key '{}' not opened: {}", name, e);
                None
            }
        }
    }

    fn child_names(&self) -> Vec<String> {
        self.enum_keys().flatten().collect()
    }

    fn value(&self, field: &str) -> Option<Value> {
        // String first; DWORD and QWORD reads fail on string data and vice versa.
        if let Ok(text) = self.get_value::<String, _>(field) {
            return Some(Value::Text(text));
        }
        if let Ok(number) = self.get_value::<u32, _>(field) {
            return Some(Value::Number(number.into()));
        }
        self.get_value::<u64, _>(field).ok().map(Value::Number)
    }
}
