use crate::{Instrument, QuestionnaireItem, ScreeningDomain};

/// Combined GAD-7 & PHQ-9 mood screen.
/// 16 items rated 0–3 over the last two weeks: the seven GAD-7 anxiety
/// items followed by the nine PHQ-9 depression items. Total 0–48.
pub struct MoodScreen;

pub const ID: &str = "gad7_phq9";

static ITEMS: [QuestionnaireItem; 16] = [
    anxiety(1, "Feeling nervous, anxious or on edge"),
    anxiety(2, "Not being able to stop or control worrying"),
    anxiety(3, "Worrying too much about different things"),
    anxiety(4, "Trouble relaxing"),
    anxiety(5, "Being so restless that it is hard to sit still"),
    anxiety(6, "Becoming easily annoyed or irritable"),
    anxiety(7, "Feeling afraid as if something awful might happen"),
    depression(8, "Little interest or pleasure in doing things"),
    depression(9, "Feeling down, depressed, or hopeless"),
    depression(10, "Trouble falling or staying asleep, or sleeping too much"),
    depression(11, "Feeling tired or having little energy"),
    depression(12, "Poor appetite or overeating"),
    depression(13, "Feeling bad about yourself or that you are a failure"),
    depression(14, "Trouble concentrating on things"),
    depression(
        15,
        "Moving or speaking so slowly that other people have noticed, or the opposite",
    ),
    depression(
        16,
        "Thoughts that you would be better off dead or hurting yourself",
    ),
];

impl Instrument for MoodScreen {
    fn id(&self) -> &str {
        ID
    }

    fn name(&self) -> &str {
        "GAD-7 & PHQ-9 Assessment"
    }

    fn prompt(&self) -> &str {
        "Over the last 2 weeks, how often have you been bothered by this problem?"
    }

    fn items(&self) -> &[QuestionnaireItem] {
        &ITEMS
    }
}

const fn anxiety(number: usize, text: &'static str) -> QuestionnaireItem {
    QuestionnaireItem {
        number,
        text,
        domain: ScreeningDomain::Anxiety,
    }
}

const fn depression(number: usize, text: &'static str) -> QuestionnaireItem {
    QuestionnaireItem {
        number,
        text,
        domain: ScreeningDomain::Depression,
    }
}
