use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{component::ConfirmationModal, model::auth::AuthContext, router::Route},
    model::user::{SellerStatusDto, UpdateUserDto, UserDto, UserRole},
};

#[cfg(feature = "web")]
use crate::client::api::{
    auth::sign_out,
    upload::upload_selected_images,
    user::{delete_user, request_seller, update_user},
};

const AVATAR_INPUT_ID: &str = "avatar-input";

/// Fields that differ from the stored profile, so unchanged values are not re-validated.
fn changed_fields(user: &UserDto, username: &str, email: &str, password: &str) -> UpdateUserDto {
    let changed = |new: &str, old: &str| {
        let new = new.trim();
        (!new.is_empty() && new != old).then(|| new.to_string())
    };

    UpdateUserDto {
        username: changed(username, &user.username),
        email: changed(email, &user.email),
        password: (!password.is_empty()).then(|| password.to_string()),
        avatar: None,
    }
}

#[component]
pub fn AccountTab() -> Element {
    let auth = use_context::<AuthContext>();

    match auth.user() {
        Some(user) => rsx!(AccountForm { key: "{user.id}", user }),
        None => rsx!(),
    }
}

#[component]
fn AccountForm(user: UserDto) -> Element {
    #[allow(unused_mut)]
    let mut auth = use_context::<AuthContext>();
    #[allow(unused_variables)]
    let nav = navigator();
    let mut username = use_signal(|| user.username.clone());
    let mut email = use_signal(|| user.email.clone());
    let mut password = use_signal(String::new);
    #[allow(unused_mut)]
    let mut busy = use_signal(|| false);
    #[allow(unused_mut)]
    let mut notice = use_signal(|| None::<Result<String, String>>);
    let mut show_delete = use_signal(|| false);

    let user_id = user.id;

    let on_avatar = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            busy.set(true);
            let result = match upload_selected_images(AVATAR_INPUT_ID).await {
                Ok(urls) => match urls.into_iter().next() {
                    Some(avatar) => {
                        let payload = UpdateUserDto {
                            avatar: Some(avatar),
                            ..Default::default()
                        };
                        update_user(user_id, payload).await.map_err(|e| e.message)
                    }
                    None => Err("No image selected".to_string()),
                },
                Err(err) => Err(err.message),
            };
            match result {
                Ok(updated) => {
                    auth.set_user(Some(updated));
                    notice.set(Some(Ok("Avatar updated".to_string())));
                }
                Err(err) => notice.set(Some(Err(err))),
            }
            busy.set(false);
        });
    };

    let stored = user.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = changed_fields(&stored, &username(), &email(), &password());
        if payload == UpdateUserDto::default() {
            notice.set(Some(Err("Nothing to update".to_string())));
            return;
        }
        #[cfg(feature = "web")]
        spawn(async move {
            busy.set(true);
            match update_user(user_id, payload).await {
                Ok(updated) => {
                    password.set(String::new());
                    auth.set_user(Some(updated));
                    notice.set(Some(Ok("Profile updated successfully".to_string())));
                }
                Err(err) => notice.set(Some(Err(err.message))),
            }
            busy.set(false);
        });
    };

    let on_request_seller = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            match request_seller().await {
                Ok(updated) => {
                    auth.set_user(Some(updated));
                    notice.set(Some(Ok("Seller request submitted".to_string())));
                }
                Err(err) => notice.set(Some(Err(err.message))),
            }
        });
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            if let Err(err) = sign_out().await {
                tracing::error!("Sign out failed: {}", err);
            }
            auth.set_user(None);
            nav.push(Route::Home {});
        });
    };

    let on_delete = move |_| {
        #[cfg(feature = "web")]
        spawn(async move {
            busy.set(true);
            match delete_user(user_id).await {
                Ok(()) => {
                    show_delete.set(false);
                    auth.set_user(None);
                    nav.push(Route::Home {});
                }
                Err(err) => notice.set(Some(Err(err.message))),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "w-full max-w-md mx-auto flex flex-col gap-4",
            label {
                class: "self-center cursor-pointer",
                r#for: AVATAR_INPUT_ID,
                div {
                    class: "avatar",
                    div {
                        class: "w-24 rounded-full",
                        img { src: "{user.avatar}", alt: "profile" }
                    }
                }
            }
            input {
                id: AVATAR_INPUT_ID,
                r#type: "file",
                accept: "image/*",
                hidden: true,
                onchange: on_avatar,
            }
            form {
                class: "flex flex-col gap-4",
                onsubmit: on_submit,
                input {
                    class: "input input-bordered w-full",
                    placeholder: "Username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    r#type: "email",
                    class: "input input-bordered w-full",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    class: "input input-bordered w-full",
                    placeholder: "New password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "btn btn-neutral",
                    disabled: busy(),
                    if busy() { "Loading..." } else { "Update" }
                }
            }
            if user.can_publish() {
                Link { to: Route::CreateListing {}, class: "btn btn-success", "Create listing" }
            } else {
                SellerStatus { user: user.clone(), on_request: on_request_seller }
            }
            div {
                class: "flex justify-between",
                button {
                    class: "btn btn-ghost text-error",
                    onclick: move |_| show_delete.set(true),
                    "Delete account"
                }
                button {
                    class: "btn btn-ghost text-error",
                    onclick: on_sign_out,
                    "Sign out"
                }
            }
            match notice() {
                Some(Ok(text)) => rsx!(p { class: "text-success", "{text}" }),
                Some(Err(text)) => rsx!(p { class: "text-error", "{text}" }),
                None => rsx!(),
            }
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete account".to_string(),
            message: "Your account and all of your listings will be removed.".to_string(),
            confirm_text: "Delete".to_string(),
            is_processing: busy(),
            on_confirm: on_delete,
        }
    }
}

#[component]
fn SellerStatus(user: UserDto, on_request: EventHandler<MouseEvent>) -> Element {
    rsx! {
        match (user.role, user.seller_status) {
            (UserRole::User, SellerStatusDto::Pending) => rsx!(
                div { class: "alert alert-info", "Your seller request is awaiting review." }
            ),
            (UserRole::User, SellerStatusDto::Rejected) => rsx!(
                div {
                    class: "alert alert-warning flex justify-between",
                    span { "Your seller request was rejected." }
                    button { class: "btn btn-sm", onclick: move |evt| on_request.call(evt), "Request again" }
                }
            ),
            _ => rsx!(
                button {
                    class: "btn btn-outline",
                    onclick: move |evt| on_request.call(evt),
                    "Become a seller"
                }
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn user() -> UserDto {
        UserDto {
            id: 7,
            username: "jane".to_string(),
            email: "jane@example.com".to_string(),
            avatar: String::new(),
            role: UserRole::User,
            seller_status: SellerStatusDto::None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn unchanged_fields_are_omitted() {
        let dto = changed_fields(&user(), "jane", " jane@example.com ", "");

        assert_eq!(dto, UpdateUserDto::default());
    }

    #[test]
    fn changed_fields_are_trimmed() {
        let dto = changed_fields(&user(), " janet ", "jane@example.com", "hunter22");

        assert_eq!(dto.username.as_deref(), Some("janet"));
        assert_eq!(dto.email, None);
        assert_eq!(dto.password.as_deref(), Some("hunter22"));
    }
}
