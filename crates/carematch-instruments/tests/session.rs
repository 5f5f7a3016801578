use carematch_instruments::error::SessionError;
use carematch_instruments::instruments::mood_screen::MoodScreen;
use carematch_instruments::scoring::{AnswerOption, Severity};
use carematch_instruments::session::{AssessmentSession, Event, Step};

fn session() -> AssessmentSession {
    AssessmentSession::new(Box::new(MoodScreen))
}

/// Answer every question with `weight` and finish.
fn complete(session: &mut AssessmentSession, weight: u8) {
    session.start().unwrap();
    for _ in 0..16 {
        session.select_answer(weight).unwrap();
        session.next().unwrap();
    }
}

#[test]
fn starts_in_mode_selection() {
    let s = session();
    assert_eq!(s.step(), Step::ModeSelection);
    assert!(s.answers().is_empty());
    assert_eq!(s.cursor(), None);
}

#[test]
fn start_moves_to_first_question() {
    let mut s = session();
    assert_eq!(s.start().unwrap(), Step::Testing { cursor: 0 });
    assert_eq!(
        s.current_item().map(|i| i.text),
        Some("Feeling nervous, anxious or on edge")
    );
}

#[test]
fn next_is_blocked_until_answered() {
    let mut s = session();
    s.start().unwrap();
    assert_eq!(s.next(), Err(SessionError::Unanswered { index: 0 }));
    assert_eq!(s.step(), Step::Testing { cursor: 0 });

    s.select_answer(1).unwrap();
    assert_eq!(s.next().unwrap(), Step::Testing { cursor: 1 });
}

#[test]
fn finishing_is_blocked_on_an_unanswered_last_question() {
    let mut s = session();
    s.start().unwrap();
    for _ in 0..15 {
        s.select_answer(0).unwrap();
        s.next().unwrap();
    }
    assert!(s.is_last_question());
    assert_eq!(s.next(), Err(SessionError::Unanswered { index: 15 }));

    s.select_answer(2).unwrap();
    assert_eq!(s.next().unwrap(), Step::Results);
}

#[test]
fn previous_has_a_floor_at_the_first_question() {
    let mut s = session();
    s.start().unwrap();
    assert_eq!(s.previous().unwrap(), Step::Testing { cursor: 0 });

    s.select_answer(1).unwrap();
    s.next().unwrap();
    assert_eq!(s.previous().unwrap(), Step::Testing { cursor: 0 });
}

#[test]
fn revisiting_a_question_overwrites_its_answer() {
    let mut s = session();
    s.start().unwrap();
    s.select_answer(1).unwrap();
    s.next().unwrap();
    s.previous().unwrap();
    assert_eq!(s.current_answer(), Some(AnswerOption::SeveralDays));

    s.select_answer(3).unwrap();
    assert_eq!(s.current_answer(), Some(AnswerOption::NearlyEveryDay));
    assert_eq!(s.answers().len(), 1);
}

#[test]
fn illegal_weight_is_rejected_without_recording() {
    let mut s = session();
    s.start().unwrap();
    assert!(matches!(s.select_answer(9), Err(SessionError::Scoring(_))));
    assert!(s.answers().is_empty());
}

#[test]
fn maximum_answers_produce_a_severe_result() {
    let mut s = session();
    complete(&mut s, 3);
    assert_eq!(s.step(), Step::Results);

    let result = s.result().unwrap();
    assert_eq!(result.total_score, 48);
    assert_eq!(result.display_score, 10);
    assert_eq!(result.interpretation.level, Severity::Severe);
}

#[test]
fn result_is_only_available_in_results() {
    let mut s = session();
    assert!(matches!(
        s.result(),
        Err(SessionError::InvalidTransition {
            event: Event::ShowResult,
            step: Step::ModeSelection
        })
    ));
    s.start().unwrap();
    assert!(s.result().is_err());
}

#[test]
fn restart_discards_answers() {
    let mut s = session();
    complete(&mut s, 2);
    assert_eq!(s.restart().unwrap(), Step::ModeSelection);
    assert!(s.answers().is_empty());

    s.start().unwrap();
    assert_eq!(s.cursor(), Some(0));
    assert_eq!(s.current_answer(), None);
}

#[test]
fn restart_is_only_legal_from_results() {
    let mut s = session();
    s.start().unwrap();
    assert_eq!(
        s.restart(),
        Err(SessionError::InvalidTransition {
            event: Event::Restart,
            step: Step::Testing { cursor: 0 }
        })
    );
}

#[test]
fn back_walks_results_to_testing_to_mode_selection() {
    let mut s = session();
    complete(&mut s, 1);

    assert_eq!(s.back().unwrap(), Step::Testing { cursor: 15 });
    assert_eq!(s.answers().len(), 16);

    assert_eq!(s.back().unwrap(), Step::ModeSelection);
    assert_eq!(s.answers().len(), 16);

    assert!(matches!(
        s.back(),
        Err(SessionError::InvalidTransition { .. })
    ));
}

#[test]
fn events_outside_testing_are_rejected_and_change_nothing() {
    let mut s = session();
    for event in [Event::Select(1), Event::Next, Event::Previous, Event::Restart] {
        assert!(s.handle(event).is_err(), "{event} should be rejected");
        assert_eq!(s.step(), Step::ModeSelection);
    }

    complete(&mut s, 0);
    assert!(s.handle(Event::Start).is_err());
    assert!(s.handle(Event::Select(1)).is_err());
    assert_eq!(s.step(), Step::Results);
}

#[test]
fn handle_dispatches_events() {
    let mut s = session();
    assert_eq!(s.handle(Event::Start).unwrap(), Step::Testing { cursor: 0 });
    s.handle(Event::Select(2)).unwrap();
    assert_eq!(s.handle(Event::Next).unwrap(), Step::Testing { cursor: 1 });
    assert_eq!(s.handle(Event::Previous).unwrap(), Step::Testing { cursor: 0 });
}

#[test]
fn error_messages_name_the_event_and_step() {
    let mut s = session();
    let err = s.next().unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot go to the next question during mode selection"
    );

    s.start().unwrap();
    assert_eq!(s.next().unwrap_err().to_string(), "question 1 has no answer yet");
}
