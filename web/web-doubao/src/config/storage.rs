use anyhow::{anyhow, Result};
use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen::JsValue;

/// 按字符串键读写的持久化存储
///
/// 值按原样保存，不做序列化，其他读写同一个键的代码看到的就是原始字符串。
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// 浏览器 localStorage
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct BrowserStorage;

impl KvStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| js_error("get", key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| js_error("set", key, e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| js_error("remove", key, e))
    }
}

fn js_error(op: &str, key: &str, e: JsValue) -> anyhow::Error {
    anyhow!("local storage {op} `{key}` failed: {e:?}")
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    use anyhow::Result;

    use super::KvStore;

    /// 内存存储，clone 出来的句柄共享同一份数据
    #[derive(Debug, Default, Clone)]
    pub struct MemoryStorage {
        entries: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStorage {
        pub fn with_entries(entries: &[(&str, &str)]) -> Self {
            let storage = Self::default();
            for (key, value) in entries {
                storage
                    .entries
                    .borrow_mut()
                    .insert(key.to_string(), value.to_string());
            }
            storage
        }

        pub fn entry(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }
    }

    impl KvStore for MemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.entry(key))
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.entries.borrow_mut().remove(key);
            Ok(())
        }
    }
}
