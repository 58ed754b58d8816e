use super::*;

#[test]
fn submit_label_covers_create_and_edit() {
    assert_eq!(submit_label(false, false, "Subject"), "Create Subject");
    assert_eq!(submit_label(false, true, "Task"), "Creating...");
    assert_eq!(submit_label(true, false, "Task"), "Save Changes");
    assert_eq!(submit_label(true, true, "Subject"), "Saving...");
}
