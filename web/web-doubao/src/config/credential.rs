use anyhow::Result;

use super::storage::KvStore;

pub const SECRET_KEY_STORAGE_KEY: &str = "doubao-api-key";
pub const MODEL_ID_STORAGE_KEY: &str = "doubao-model-id";
pub const DEFAULT_MODEL_ID: &str = "doubao-pro-4k";

/// 按浏览器 `String.prototype.trim` 的字符集去掉首尾空白
///
/// 与 `str::trim` 相比多去掉 U+FEFF，保留 U+0085。
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

/// 接收配置变化的一方
///
/// 加载、编辑、清除时都会同步调用，调用时存储已经更新完毕。
pub trait CredentialObserver {
    fn secret_changed(&self, secret_key: &str);

    fn model_changed(&self, model_id: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialStatus {
    /// 已保存密钥
    Configured,
    /// 必填但还没有密钥
    Required,
    Unset,
}

/// API 密钥与模型ID的编辑状态
///
/// 输入框里保留用户输入的原文，写入存储和通知观察者的值都是 trim 之后的。
#[derive(Debug)]
pub struct CredentialConfig<S> {
    store: S,
    secret_key: String,
    model_id: String,
    visible: bool,
    configured: bool,
    initialized: bool,
}

impl<S: KvStore> CredentialConfig<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            secret_key: String::new(),
            model_id: String::new(),
            visible: false,
            configured: false,
            initialized: false,
        }
    }

    /// 从存储加载配置，每个实例只生效一次
    pub fn initialize(&mut self, observer: &impl CredentialObserver) -> Result<()> {
        if self.initialized {
            return Ok(());
        }
        self.initialized = true;

        let saved_secret_key = self
            .store
            .get(SECRET_KEY_STORAGE_KEY)?
            .filter(|s| !s.is_empty());
        let saved_model_id = self
            .store
            .get(MODEL_ID_STORAGE_KEY)?
            .filter(|s| !s.is_empty());

        self.configured = saved_secret_key.is_some();
        if let Some(secret_key) = saved_secret_key {
            self.secret_key = secret_key;
            observer.secret_changed(&self.secret_key);
        }

        match saved_model_id {
            Some(model_id) => {
                self.model_id = model_id;
                observer.model_changed(&self.model_id);
            }
            None => {
                self.model_id = DEFAULT_MODEL_ID.to_string();
                self.store.set(MODEL_ID_STORAGE_KEY, DEFAULT_MODEL_ID)?;
                log::debug!("model id not found, seeded with {DEFAULT_MODEL_ID}");
                observer.model_changed(DEFAULT_MODEL_ID);
            }
        }

        log::debug!(
            "credential loaded, configured: {}, model: {}",
            self.configured,
            self.model_id
        );
        Ok(())
    }

    pub fn edit_secret_key(
        &mut self,
        value: impl Into<String>,
        observer: &impl CredentialObserver,
    ) -> Result<()> {
        self.secret_key = value.into();

        let trimmed = trim_input(&self.secret_key);
        if trimmed.is_empty() {
            self.store.remove(SECRET_KEY_STORAGE_KEY)?;
            self.configured = false;
        } else {
            self.store.set(SECRET_KEY_STORAGE_KEY, trimmed)?;
            self.configured = true;
        }
        log::debug!("secret key saved, configured: {}", self.configured);

        observer.secret_changed(trimmed);
        Ok(())
    }

    pub fn edit_model_id(
        &mut self,
        value: impl Into<String>,
        observer: &impl CredentialObserver,
    ) -> Result<()> {
        self.model_id = value.into();

        let trimmed = trim_input(&self.model_id);
        if trimmed.is_empty() {
            self.store.remove(MODEL_ID_STORAGE_KEY)?;
        } else {
            self.store.set(MODEL_ID_STORAGE_KEY, trimmed)?;
        }
        log::debug!("model id saved: {trimmed:?}");

        observer.model_changed(trimmed);
        Ok(())
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// 删除密钥，模型ID恢复为默认值
    pub fn clear(&mut self, observer: &impl CredentialObserver) -> Result<()> {
        self.secret_key.clear();
        self.model_id = DEFAULT_MODEL_ID.to_string();

        self.store.remove(SECRET_KEY_STORAGE_KEY)?;
        self.store.set(MODEL_ID_STORAGE_KEY, DEFAULT_MODEL_ID)?;
        self.configured = false;
        log::debug!("credential cleared");

        observer.secret_changed("");
        observer.model_changed(DEFAULT_MODEL_ID);
        Ok(())
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn status(&self, is_required: bool) -> CredentialStatus {
        if self.is_configured() {
            CredentialStatus::Configured
        } else if is_required {
            CredentialStatus::Required
        } else {
            CredentialStatus::Unset
        }
    }

    pub fn can_clear(&self) -> bool {
        self.is_configured()
    }

    pub fn secret_input_type(&self) -> &'static str {
        if self.visible {
            "text"
        } else {
            "password"
        }
    }
}
