use yew::prelude::*;
use yew_hooks::use_mount;
use yew_router::prelude::*;

use crate::components::anchor::scroll_to_top;
use crate::content::BRAND;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_mount(scroll_to_top);

    html! {
        <div class="not-found">
            <p class="not-found-code font-display">{"404"}</p>
            <h1 class="not-found-title">{"お探しのページは見つかりませんでした"}</h1>
            <p class="not-found-text">
                {"ページが移動または削除された可能性があります。"}
            </p>
            <Link<Route> to={Route::Home} classes="btn-outline-gold">
                {format!("{} トップへ戻る", BRAND)}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        padding: 2rem;
                        text-align: center;
                    }
                    .not-found-code {
                        font-size: 5rem;
                        color: var(--gold);
                        line-height: 1;
                    }
                    .not-found-title {
                        font-size: 1.5rem;
                        letter-spacing: 0.1em;
                    }
                    .not-found-text {
                        color: #8a8578;
                        margin-bottom: 1rem;
                    }
                "#}
            </style>
        </div>
    }
}
