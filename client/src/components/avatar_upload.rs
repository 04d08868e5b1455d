//! Avatar picker that uploads through the session store.
//!
//! DESIGN
//! ======
//! The file is checked against the backend's limits before its bytes are read
//! so an oversized or unsupported pick fails fast with a readable message.
//! Reading the `File` needs the browser; elsewhere the picker is inert.

#[cfg(test)]
#[path = "avatar_upload_test.rs"]
mod avatar_upload_test;

use leptos::prelude::*;

use crate::app::use_app;
#[cfg(feature = "csr")]
use crate::net::transport::AvatarFile;

pub const ALLOWED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];
pub const MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;

/// Check a picked file's name and size against the upload limits.
///
/// # Errors
///
/// Returns a user-facing message for an unsupported extension or size.
pub fn validate_avatar(file_name: &str, size: u64) -> Result<(), &'static str> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err("Choose a png, jpg, gif or webp image.");
    }
    if size == 0 {
        return Err("The selected file is empty.");
    }
    if size > MAX_AVATAR_BYTES {
        return Err("Avatar must be 5 MB or smaller.");
    }
    Ok(())
}

#[component]
pub fn AvatarUpload() -> impl IntoView {
    let ctx = use_app();
    let session = ctx.session.state();
    let status = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast as _;

            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            // File sizes are integral byte counts.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = file.size() as u64;
            if let Err(message) = validate_avatar(&file.name(), size) {
                status.set(Some(message.to_owned()));
                return;
            }
            busy.set(true);
            status.set(Some("Uploading...".to_owned()));
            leptos::task::spawn_local(async move {
                let message = match read_file(&file).await {
                    Ok(avatar) => {
                        let outcome = ctx.session.upload_avatar(avatar).await;
                        if outcome.success {
                            "Avatar updated.".to_owned()
                        } else {
                            outcome.message.unwrap_or_else(|| "Avatar upload failed.".to_owned())
                        }
                    }
                    Err(message) => message,
                };
                status.set(Some(message));
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (ev, busy);
        }
    };

    view! {
        <section class="avatar-upload">
            {move || {
                session.with(|s| {
                    s.avatar().map(|src| view! { <img class="avatar-upload__current" src=src.to_owned() alt="Avatar"/> })
                })
            }}
            <label class="avatar-upload__label">
                "Change avatar"
                <input
                    type="file"
                    accept=".png,.jpg,.jpeg,.gif,.webp"
                    disabled=move || busy.get()
                    on:change=on_change
                />
            </label>
            <Show when=move || status.get().is_some()>
                <p class="avatar-upload__status">{move || status.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}

#[cfg(feature = "csr")]
async fn read_file(file: &web_sys::File) -> Result<AvatarFile, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|_| "Could not read the selected file.".to_owned())?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let content_type = Some(file.type_()).filter(|t| !t.is_empty());
    Ok(AvatarFile { file_name: file.name(), content_type, bytes })
}
