//! Profile page showing the signed-in identity.

use leptos::prelude::*;

use crate::state::session::use_session;

/// Profile page. Protected route; renders the identity fields the session
/// endpoint returned at resolution time.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            {move || {
                session
                    .get()
                    .user()
                    .map(|user| {
                        view! {
                            <dl class="profile-page__fields">
                                <dt>"Name"</dt>
                                <dd>{user.name.clone()}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email.clone()}</dd>
                            </dl>
                        }
                    })
            }}
        </div>
    }
}
