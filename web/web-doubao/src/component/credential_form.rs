use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{
    credential::{CredentialConfig, CredentialObserver, CredentialStatus},
    storage::BrowserStorage,
};

const ARK_CONSOLE_URL: &str = "https://console.volcengine.com/ark";

#[derive(PartialEq, Properties)]
pub struct CredentialFormProps {
    pub on_secret_change: Callback<String>,
    pub on_model_change: Callback<String>,
    #[prop_or(true)]
    pub is_required: bool,
}

impl CredentialObserver for CredentialFormProps {
    fn secret_changed(&self, secret_key: &str) {
        self.on_secret_change.emit(secret_key.to_string());
    }

    fn model_changed(&self, model_id: &str) {
        self.on_model_change.emit(model_id.to_string());
    }
}

/// API 密钥配置表单，内容保存在浏览器 localStorage 中
pub struct CredentialForm {
    config: CredentialConfig<BrowserStorage>,
}

pub enum CredentialFormMsg {
    EditSecretKey(String),
    EditModelId(String),
    ToggleVisibility,
    Clear,
}

impl Component for CredentialForm {
    type Message = CredentialFormMsg;
    type Properties = CredentialFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut config = CredentialConfig::new(BrowserStorage);
        if let Err(e) = config.initialize(ctx.props()) {
            log::error!("load credential error: {e}");
        }
        Self { config }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let result = match msg {
            CredentialFormMsg::EditSecretKey(value) => {
                self.config.edit_secret_key(value, ctx.props())
            }
            CredentialFormMsg::EditModelId(value) => {
                self.config.edit_model_id(value, ctx.props())
            }
            CredentialFormMsg::ToggleVisibility => {
                self.config.toggle_visibility();
                Ok(())
            }
            CredentialFormMsg::Clear => self.config.clear(ctx.props()),
        };
        if let Err(e) = result {
            log::error!("save credential error: {e}");
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_edit_secret_key = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            CredentialFormMsg::EditSecretKey(input.value())
        });
        let on_edit_model_id = ctx.link().callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            CredentialFormMsg::EditModelId(input.value())
        });
        let on_toggle = ctx
            .link()
            .callback(|_: MouseEvent| CredentialFormMsg::ToggleVisibility);
        let on_clear = ctx.link().callback(|_: MouseEvent| CredentialFormMsg::Clear);

        let badge = match self.config.status(ctx.props().is_required) {
            CredentialStatus::Configured => html! {
                <span class="badge rounded-pill text-bg-success">{"已配置"}</span>
            },
            CredentialStatus::Required => html! {
                <span class="badge rounded-pill text-bg-danger">{"必需"}</span>
            },
            CredentialStatus::Unset => html! {},
        };
        let toggle_label = if self.config.is_visible() {
            "隐藏"
        } else {
            "显示"
        };

        html! {
            <div class="card">
                <div class="card-body">
                    <div class="d-flex align-items-center justify-content-between mb-3">
                        <div class="d-flex align-items-center gap-2">
                            <h5 class="card-title mb-0">{"API 密钥配置"}</h5>
                            {badge}
                        </div>
                        if self.config.can_clear() {
                            <button type="button" class="btn btn-link link-danger btn-sm" onclick={on_clear}>
                                {"清除"}
                            </button>
                        }
                    </div>

                    <div class="input-group mb-3">
                        <input type={self.config.secret_input_type()} class="form-control" id="doubao_api_key"
                            placeholder="请输入您的火山引擎豆包 API 密钥"
                            value={self.config.secret_key().to_string()} oninput={on_edit_secret_key} />
                        <button type="button" class="btn btn-outline-secondary" onclick={on_toggle}>
                            {toggle_label}
                        </button>
                    </div>

                    <div class="mb-3">
                        <input type="text" class="form-control" id="doubao_model_id"
                            placeholder="请输入模型ID (如: doubao-pro-4k 或您的推理接入点ID)"
                            value={self.config.model_id().to_string()} oninput={on_edit_model_id} />
                    </div>

                    <ul class="text-body-secondary small mb-0">
                        <li>
                            {"请在 "}
                            <a href={ARK_CONSOLE_URL} target="_blank" rel="noopener noreferrer">{"火山引擎控制台"}</a>
                            {" 获取您的 API 密钥"}
                        </li>
                        <li>{"模型ID可以是通用模型(如doubao-pro-4k)或您创建的推理接入点ID"}</li>
                        <li>{"API 密钥将保存在您的浏览器本地存储中"}</li>
                        <li>{"我们不会收集或存储您的 API 密钥和模型配置"}</li>
                    </ul>
                </div>
            </div>
        }
    }
}
