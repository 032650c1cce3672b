use yew::prelude::*;
use yew_router::prelude::Redirect;

/// 未知路径统一回到配置页
#[function_component]
pub fn NotFoundPage() -> Html {
    html! {
        <Redirect<crate::Route> to={crate::Route::Credential} />
    }
}
