mod common;

use common::{create_test_invitations, scripted_ids};
use jiff::civil::date;
use sakura_core::{
    codec, store::record_key, AcceptanceSelection, AfterDateSelection, DateSelection,
    DateTypeSelection, FoodSelection, InvitationError, InvitationRecord, KeyValueStore,
    RecordUpdate, StepSelection, WizardEngine, WizardStep,
};

#[test]
fn test_full_wizard_scenario() {
    let (_temp_dir, mut invitations) = create_test_invitations();
    let mut wizard = WizardEngine::new();

    wizard.advance(RecordUpdate::none()).expect("invitation");
    wizard.advance(RecordUpdate::accepted()).expect("acceptance");
    wizard
        .advance(RecordUpdate::date(date(2025, 6, 1)))
        .expect("date");
    wizard
        .advance(RecordUpdate::date_type("dinner"))
        .expect("date type");
    wizard.advance(RecordUpdate::food("italian")).expect("food");
    wizard
        .advance(RecordUpdate::after_date("walk", ""))
        .expect("after date");

    let id = wizard
        .save(&mut invitations, &mut scripted_ids(&["n4d8q1zp"]))
        .expect("save")
        .to_string();

    let raw = invitations
        .store()
        .get(&record_key(&id))
        .expect("read record")
        .expect("record should be stored");
    let stored = codec::decode(&raw).expect("stored record decodes");

    assert_eq!(
        stored,
        InvitationRecord {
            accepted: true,
            date: Some(date(2025, 6, 1)),
            date_type: "dinner".to_string(),
            date_type_specifics: String::new(),
            food_preference: "italian".to_string(),
            after_date_activity: "walk".to_string(),
            suggestions: String::new(),
        }
    );
    assert!(invitations
        .list_known_ids()
        .expect("list")
        .contains(&id));
    assert_eq!(wizard.current_step(), WizardStep::Responses);
}

#[test]
fn test_wizard_driven_by_selections() {
    let (_temp_dir, mut invitations) = create_test_invitations();
    let mut wizard = WizardEngine::new();
    let today = date(2025, 5, 20);

    wizard.advance(RecordUpdate::none()).expect("invitation");

    let mut acceptance = AcceptanceSelection::new();
    acceptance.decline();
    acceptance.accept();
    acceptance.submit(&mut wizard).expect("acceptance");

    let mut day = DateSelection::new(today);
    day.select(date(2025, 6, 14)).expect("date in window");
    day.submit(&mut wizard).expect("date");

    DateTypeSelection::new("concert")
        .with_specifics("jazz")
        .submit(&mut wizard)
        .expect("date type");
    FoodSelection::new("thai")
        .submit(&mut wizard)
        .expect("food");
    AfterDateSelection::new("drinks", "Somewhere quiet")
        .submit(&mut wizard)
        .expect("after date");

    assert_eq!(wizard.current_step(), WizardStep::Confirmation);

    let id = wizard
        .save(&mut invitations, &mut scripted_ids(&["c0ncert1"]))
        .expect("save")
        .to_string();

    let found = invitations.find(&id).expect("find");
    assert_eq!(found.date_type, "concert");
    assert_eq!(found.date_type_specifics, "jazz");
    assert_eq!(found.suggestions, "Somewhere quiet");
    assert_eq!(&found, wizard.record());
}

#[test]
fn test_index_never_exceeds_terminal_step() {
    let mut wizard = WizardEngine::new();
    let mut previous = wizard.current_step_index();

    while wizard.advance(RecordUpdate::none()).is_ok() {
        assert_eq!(wizard.current_step_index(), previous + 1);
        previous = wizard.current_step_index();
    }

    assert!(wizard.current_step_index() <= WizardStep::LAST_INDEX);
    assert_eq!(wizard.current_step(), WizardStep::Confirmation);
}

#[test]
fn test_sessions_accumulate_in_index() {
    let (_temp_dir, mut invitations) = create_test_invitations();
    let mut ids = scripted_ids(&["first001", "second02", "third003"]);

    for food in ["italian", "mexican", "thai"] {
        let mut wizard = WizardEngine::new();
        for _ in 0..4 {
            wizard.advance(RecordUpdate::none()).expect("advance");
        }
        wizard.advance(RecordUpdate::food(food)).expect("food");
        wizard
            .advance(RecordUpdate::after_date("home", ""))
            .expect("after date");
        wizard.save(&mut invitations, &mut ids).expect("save");
    }

    assert_eq!(
        invitations.list_known_ids().expect("list"),
        ["first001", "second02", "third003"]
    );
    assert_eq!(
        invitations.find("second02").expect("find").food_preference,
        "mexican"
    );
}

#[test]
fn test_find_nonexistent_id() {
    let (_temp_dir, invitations) = create_test_invitations();
    assert!(matches!(
        invitations.find("nonexistent-id"),
        Err(InvitationError::NotFound { .. })
    ));
}
