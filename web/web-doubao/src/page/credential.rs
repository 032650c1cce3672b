use yew::prelude::*;

use crate::component::*;

/// 密钥较短时整体遮挡，否则只露出首尾
fn mask_secret_key(secret_key: &str) -> String {
    let chars: Vec<char> = secret_key.chars().collect();
    if chars.len() < 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..3].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{head}****{tail}")
}

#[function_component]
pub fn CredentialPage() -> Html {
    let secret_key = use_state(String::new);
    let model_id = use_state(String::new);

    let on_secret_change = {
        let secret_key = secret_key.clone();
        Callback::from(move |value: String| secret_key.set(value))
    };
    let on_model_change = {
        let model_id = model_id.clone();
        Callback::from(move |value: String| model_id.set(value))
    };

    let secret_summary = if secret_key.is_empty() {
        html! { <span class="text-danger">{"未设置"}</span> }
    } else {
        html! { <code>{mask_secret_key(&secret_key)}</code> }
    };

    html! {
        <>
            <Title title="API 配置" />

            <div class="container-sm" style="padding-top: 1em; padding-bottom: 1em;">
                <h3>{"豆包 API 配置"}</h3>

                <CredentialForm {on_secret_change} {on_model_change} />

                <dl class="row mt-3">
                    <dt class="col-sm-2">{"API 密钥"}</dt>
                    <dd class="col-sm-10">{secret_summary}</dd>
                    <dt class="col-sm-2">{"当前模型"}</dt>
                    <dd class="col-sm-10"><code>{(*model_id).clone()}</code></dd>
                </dl>
            </div>
        </>
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mask_secret_key_keeps_head_and_tail() {
        assert_eq!(mask_secret_key("sk-abc123"), "sk-****23");
        assert_eq!(mask_secret_key("12345678"), "123****78");
    }

    #[test]
    fn mask_short_secret_key_completely() {
        assert_eq!(mask_secret_key(""), "");
        assert_eq!(mask_secret_key("abc"), "***");
        assert_eq!(mask_secret_key("密钥密钥密钥密"), "*******");
    }
}
