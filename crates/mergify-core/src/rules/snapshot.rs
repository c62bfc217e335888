use mergify_models::ConditionField;

/// Live attribute snapshot of a pull request.
///
/// Built by the worker right before matching rules: pull request state
/// mutates continuously, so a snapshot is never reused across evaluations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestSnapshot {
    /// Head branch name.
    pub head: String,
    /// Base branch name.
    pub base: String,
    /// Author login.
    pub author: String,
    /// Merge actor login.
    pub merged_by: Option<String>,
    /// Body text.
    pub body: String,
    /// Assignee logins.
    pub assignees: Vec<String>,
    /// Label names.
    pub labels: Vec<String>,
    /// Locked state.
    pub locked: bool,
    /// Title.
    pub title: String,
    /// Modified file paths.
    pub files: Vec<String>,
    /// Milestone title.
    pub milestone: Option<String>,
    /// Requested reviewer logins.
    pub review_requested: Vec<String>,
    /// Logins of approving reviewers.
    pub review_approved_by: Vec<String>,
    /// Logins of dismissed reviewers.
    pub review_dismissed_by: Vec<String>,
    /// Logins of reviewers requesting changes.
    pub review_changes_requested_by: Vec<String>,
    /// Logins of commenting reviewers.
    pub review_commented_by: Vec<String>,
    /// Successful status contexts.
    pub status_success: Vec<String>,
    /// Pending status contexts.
    pub status_pending: Vec<String>,
    /// Failed status contexts.
    pub status_failure: Vec<String>,
}

/// Current value of one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Attribute<'a> {
    Scalar(&'a str),
    OptionalScalar(Option<&'a str>),
    Bool(bool),
    List(&'a [String]),
}

impl PullRequestSnapshot {
    /// Look up the current value of a condition field.
    pub(crate) fn attribute(&self, field: ConditionField) -> Attribute<'_> {
        match field {
            ConditionField::Head => Attribute::Scalar(&self.head),
            ConditionField::Base => Attribute::Scalar(&self.base),
            ConditionField::Author => Attribute::Scalar(&self.author),
            ConditionField::MergedBy => Attribute::OptionalScalar(self.merged_by.as_deref()),
            ConditionField::Body => Attribute::Scalar(&self.body),
            ConditionField::Assignee => Attribute::List(&self.assignees),
            ConditionField::Label => Attribute::List(&self.labels),
            ConditionField::Locked => Attribute::Bool(self.locked),
            ConditionField::Title => Attribute::Scalar(&self.title),
            ConditionField::Files => Attribute::List(&self.files),
            ConditionField::Milestone => Attribute::OptionalScalar(self.milestone.as_deref()),
            ConditionField::ReviewRequested => Attribute::List(&self.review_requested),
            ConditionField::ReviewApprovedBy => Attribute::List(&self.review_approved_by),
            ConditionField::ReviewDismissedBy => Attribute::List(&self.review_dismissed_by),
            ConditionField::ReviewChangesRequestedBy => {
                Attribute::List(&self.review_changes_requested_by)
            }
            ConditionField::ReviewCommentedBy => Attribute::List(&self.review_commented_by),
            ConditionField::StatusSuccess => Attribute::List(&self.status_success),
            ConditionField::StatusPending => Attribute::List(&self.status_pending),
            ConditionField::StatusFailure => Attribute::List(&self.status_failure),
        }
    }
}
