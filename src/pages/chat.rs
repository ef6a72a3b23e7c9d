//! Chat page; the room segment is optional.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;

fn chat_heading(chat_room_id: Option<&str>) -> String {
    match chat_room_id {
        Some(id) => format!("Room {id}"),
        None => "Select a conversation".to_owned(),
    }
}

#[component]
pub fn ChatPage(chat_room_id: Option<String>) -> impl IntoView {
    let heading = chat_heading(chat_room_id.as_deref());
    view! {
        <section class="chat-page">
            <h2>{heading}</h2>
        </section>
    }
}
