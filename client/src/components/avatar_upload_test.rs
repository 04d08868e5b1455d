use super::*;

#[test]
fn accepts_supported_images_case_insensitively() {
    assert_eq!(validate_avatar("me.PNG", 1024), Ok(()));
    assert_eq!(validate_avatar("photo.final.jpeg", MAX_AVATAR_BYTES), Ok(()));
}

#[test]
fn rejects_unsupported_or_missing_extension() {
    assert_eq!(validate_avatar("notes.txt", 10), Err("Choose a png, jpg, gif or webp image."));
    assert_eq!(validate_avatar("avatar", 10), Err("Choose a png, jpg, gif or webp image."));
}

#[test]
fn rejects_empty_and_oversized_files() {
    assert_eq!(validate_avatar("me.gif", 0), Err("The selected file is empty."));
    assert_eq!(validate_avatar("me.webp", MAX_AVATAR_BYTES + 1), Err("Avatar must be 5 MB or smaller."));
}
