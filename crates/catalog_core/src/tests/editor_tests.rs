use super::*;
use shared::{domain::Product, error::ErrorCode, seed::mock_products};

struct FrozenClock(i64);

impl Clock for FrozenClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

struct RecordingPrompt {
    answer: bool,
    prompts: Vec<String>,
}

impl Confirm for RecordingPrompt {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answer
    }
}

fn editor() -> CatalogEditor<MemoryStore, FrozenClock> {
    CatalogEditor::with_clock(
        MemoryStore::from_seed(mock_products()),
        FrozenClock(1_700_000_000_000),
    )
}

#[test]
fn add_new_allocates_unused_id() {
    let mut editor = editor();
    let id = editor.add_new().expect("open");
    assert_eq!(id, ProductId(1_700_000_000_000));
    assert_eq!(editor.session().mode(), Some(SessionMode::Create));
    assert!(editor.records().iter().all(|p| p.id != id));
}

#[test]
fn add_new_while_open_is_a_conflict() {
    let mut editor = editor();
    editor.edit(ProductId(1)).expect("edit");
    let err = editor.add_new().expect_err("open session");
    assert_eq!(err.code, ErrorCode::Conflict);
}

#[test]
fn add_new_fails_when_ids_are_exhausted() {
    let top = Product {
        id: ProductId(i64::MAX),
        ..mock_products().remove(0)
    };
    let mut editor = CatalogEditor::with_clock(
        MemoryStore::from_seed(vec![top.clone()]),
        FrozenClock(1_700_000_000_000),
    );
    let err = editor.add_new().expect_err("id space used up");
    assert_eq!(err.code, ErrorCode::Internal);
    assert!(!editor.session().is_open());
    assert_eq!(editor.records(), [top].as_slice());
}

#[test]
fn edit_unknown_listing_is_not_found() {
    let mut editor = editor();
    let err = editor.edit(ProductId(77)).expect_err("unknown");
    assert_eq!(err.code, ErrorCode::NotFound);
    assert!(!editor.session().is_open());
}

#[test]
fn two_creations_in_one_tick_get_distinct_ids() {
    let mut editor = editor();
    for name in ["First", "Second"] {
        editor.add_new().expect("open");
        editor.set_field(ProductField::Name, name).expect("name");
        editor.save().expect("save");
    }
    let ids: Vec<_> = editor.records().iter().take(2).map(|p| p.id.0).collect();
    assert_eq!(ids, vec![1_700_000_000_001, 1_700_000_000_000]);
    assert_eq!(editor.stats().total_listings, 7);
}

#[test]
fn save_without_session_reports_no_session() {
    let mut editor = editor();
    let err = editor.save().expect_err("nothing open");
    assert_eq!(err.code, ErrorCode::NoSession);
}

#[test]
fn invalid_save_mutates_nothing() {
    let mut editor = editor();
    let before = editor.records().to_vec();
    editor.add_new().expect("open");
    let err = editor.save().expect_err("name missing");
    assert_eq!(err.code, ErrorCode::Validation);
    assert_eq!(editor.records(), before.as_slice());
    assert!(editor.session().is_open());
}

#[test]
fn delete_prompts_with_localized_text() {
    let mut editor = editor().with_locale(Locale::Ar);
    let mut prompt = RecordingPrompt {
        answer: false,
        prompts: Vec::new(),
    };
    let outcome = editor.delete(ProductId(1), &mut prompt).expect("delete");
    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(prompt.prompts, vec!["هل أنت متأكد من حذف هذا الإعلان؟".to_string()]);
}

#[test]
fn delete_while_editing_is_rejected_without_prompting() {
    let mut editor = editor();
    editor.edit(ProductId(1)).expect("edit");
    let mut prompt = RecordingPrompt {
        answer: true,
        prompts: Vec::new(),
    };
    let err = editor
        .delete(ProductId(2), &mut prompt)
        .expect_err("session open");
    assert_eq!(err.code, ErrorCode::Conflict);
    assert!(prompt.prompts.is_empty());
    assert_eq!(editor.stats().total_listings, 5);
}

#[test]
fn confirmed_delete_of_missing_id_reports_missing() {
    let mut editor = editor();
    let mut prompt = RecordingPrompt {
        answer: true,
        prompts: Vec::new(),
    };
    let outcome = editor.delete(ProductId(404), &mut prompt).expect("delete");
    assert_eq!(outcome, DeleteOutcome::Missing);
    assert_eq!(editor.stats().total_listings, 5);
}

#[test]
fn view_reflects_open_session() {
    let mut editor = editor();
    assert!(editor.view().form.is_none());
    editor.edit(ProductId(3)).expect("edit");
    let view = editor.view();
    let form = view.form.expect("form");
    assert_eq!(form.mode, SessionMode::Update);
    assert_eq!(form.title, "Edit listing");
}
