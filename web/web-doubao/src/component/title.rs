use anyhow::*;
use web_sys::window;
use yew::prelude::*;

const SITE_NAME: &str = "豆包";

#[derive(PartialEq, Properties)]
pub struct TitleProps {
    pub title: AttrValue,
}

#[function_component]
pub fn Title(props: &TitleProps) -> Html {
    let title = document_title(&props.title);
    if let Err(e) = set_title(&title) {
        log::error!("set title error: {e}");
    }

    html! {
        <></>
    }
}

// 页面标题后统一追加站点名，空标题只显示站点名
fn document_title(title: &str) -> String {
    if title.is_empty() {
        SITE_NAME.to_string()
    } else {
        format!("{title} - {SITE_NAME}")
    }
}

fn set_title(title: &str) -> Result<(), Error> {
    window()
        .ok_or(anyhow!("window not found"))?
        .document()
        .ok_or(anyhow!("document not found"))?
        .set_title(title);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn document_title_appends_site_name() {
        assert_eq!(document_title("API 配置"), "API 配置 - 豆包");
        assert_eq!(document_title(""), "豆包");
    }
}
