mod wizard;

pub use wizard::{SubmissionStatus, Wizard, WizardStep};
