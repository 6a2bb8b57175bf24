use dioxus::prelude::*;

use crate::{use_access, Crumb, Header};

#[component]
pub fn UserProfileView(uid: String) -> Element {
    let _auth = use_access();
    let profile_href = format!("/{}", dashboard::profile_path(&uid));

    rsx! {
        Header {
            crumbs: vec![
                Crumb::new("/usermanage", "User Management"),
                Crumb::new(&profile_href, "Profile"),
            ],
        }
        section {
            class: "panel",
            h2 { "User profile" }
            p { class: "muted", "UID: {uid}" }
        }
    }
}
