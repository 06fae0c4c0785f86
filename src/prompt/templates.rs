//! Canonical OpenSpec workflow templates.
//!
//! The template store: a closed set of identifiers, each resolving to a
//! canonical instruction body plus the user-facing metadata the command
//! surface shows for it. Unknown identifiers fail loudly at the parse
//! boundary; after that every lookup is an exhaustive match.

use crate::error::OspecError;
use std::fmt;
use std::str::FromStr;

/// Closed set of canonical OpenSpec workflow templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    Proposal,
    DesignArchitect,
    InitArchitect,
    RefineArchitect,
    SyncCodeToArchitect,
    Apply,
    Archive,
}

impl TemplateId {
    /// Every template identifier, in presentation order.
    pub const ALL: [TemplateId; 7] = [
        TemplateId::Proposal,
        TemplateId::DesignArchitect,
        TemplateId::InitArchitect,
        TemplateId::RefineArchitect,
        TemplateId::SyncCodeToArchitect,
        TemplateId::Apply,
        TemplateId::Archive,
    ];

    /// Canonical string form of the identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Proposal => "proposal",
            TemplateId::DesignArchitect => "design-architect",
            TemplateId::InitArchitect => "init-architect",
            TemplateId::RefineArchitect => "refine-architect",
            TemplateId::SyncCodeToArchitect => "sync-code-to-architect",
            TemplateId::Apply => "apply",
            TemplateId::Archive => "archive",
        }
    }

    /// Short description shown in template listings.
    pub fn description(&self) -> &'static str {
        match self {
            TemplateId::Proposal => {
                "Create an OpenSpec change proposal using canonical guardrails and steps"
            }
            TemplateId::DesignArchitect => {
                "Iterate the OpenSpec architecture DSL before implementation"
            }
            TemplateId::InitArchitect => {
                "Seed the OpenSpec architecture DSL from a requirement document"
            }
            TemplateId::RefineArchitect => {
                "Refine the OpenSpec architecture DSL with a targeted prompt"
            }
            TemplateId::SyncCodeToArchitect => {
                "Sync the OpenSpec architecture DSL with code-level findings"
            }
            TemplateId::Apply => "Follow the OpenSpec apply workflow and checklist",
            TemplateId::Archive => "Archive an OpenSpec change using the canonical workflow",
        }
    }

    /// Progress note shown while the prompt is being assembled.
    pub fn progress_message(&self) -> &'static str {
        match self {
            TemplateId::Proposal => "assembling OpenSpec proposal instructions",
            TemplateId::DesignArchitect => "preparing OpenSpec design-architect guidance",
            TemplateId::InitArchitect => "preparing OpenSpec init-architect guidance",
            TemplateId::RefineArchitect => "preparing OpenSpec refine-architect guidance",
            TemplateId::SyncCodeToArchitect => {
                "preparing OpenSpec sync-code-to-architect guidance"
            }
            TemplateId::Apply => "preparing OpenSpec apply guidance",
            TemplateId::Archive => "preparing OpenSpec archive guidance",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = OspecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "proposal" => Ok(TemplateId::Proposal),
            "design-architect" => Ok(TemplateId::DesignArchitect),
            "init-architect" => Ok(TemplateId::InitArchitect),
            "refine-architect" => Ok(TemplateId::RefineArchitect),
            "sync-code-to-architect" => Ok(TemplateId::SyncCodeToArchitect),
            "apply" => Ok(TemplateId::Apply),
            "archive" => Ok(TemplateId::Archive),
            other => Err(OspecError::UnknownTemplate(other.to_string())),
        }
    }
}

/// Resolve the canonical instruction body for a template.
pub fn template_body(id: TemplateId) -> &'static str {
    match id {
        TemplateId::Proposal => PROPOSAL_BODY,
        TemplateId::DesignArchitect => DESIGN_ARCHITECT_BODY,
        TemplateId::InitArchitect => INIT_ARCHITECT_BODY,
        TemplateId::RefineArchitect => REFINE_ARCHITECT_BODY,
        TemplateId::SyncCodeToArchitect => SYNC_CODE_TO_ARCHITECT_BODY,
        TemplateId::Apply => APPLY_BODY,
        TemplateId::Archive => ARCHIVE_BODY,
    }
}

const PROPOSAL_BODY: &str = "\
Create an OpenSpec change proposal for the requested work.

1. Run `openspec list` to review existing changes and avoid id collisions.
2. Pick a short kebab-case change id that names the outcome, not the code.
3. Scaffold `openspec/changes/<change-id>/` with `proposal.md`, `tasks.md`,
   and one spec delta per affected capability.
4. In `proposal.md`, state the problem, the proposed behavior change, and
   what is explicitly out of scope.
5. In `tasks.md`, break the work into small, independently verifiable tasks.
6. Run `openspec validate <change-id> --strict` and fix every finding before
   presenting the proposal.

Do not write implementation code as part of this workflow.";

const DESIGN_ARCHITECT_BODY: &str = "\
Iterate on the architecture DSL for an existing OpenSpec change before any
implementation starts.

1. Read the change's `design.md` and the spec deltas it references.
2. Identify components whose responsibilities, interfaces, or data flows are
   underspecified, and tighten them in the DSL.
3. Keep the DSL declarative: components, ports, and relations only.
4. Record unresolved trade-offs as open questions instead of guessing.
5. Re-run `openspec validate --strict` to confirm the change still parses.";

const INIT_ARCHITECT_BODY: &str = "\
Seed the architecture DSL for this project from a requirement document.

1. Read the referenced requirement document end to end before writing.
2. Extract the system boundary, external actors, and major capabilities.
3. Write the initial DSL: one component per capability, with explicit
   interfaces between components and to external actors.
4. Flag requirements the DSL cannot express yet rather than bending it.
5. Store the result where the OpenSpec convention expects it and validate.";

const REFINE_ARCHITECT_BODY: &str = "\
Refine the existing architecture DSL with a targeted prompt.

1. Locate the DSL region the prompt targets; do not rewrite unrelated parts.
2. Apply the requested refinement, preserving component and port names that
   other changes reference.
3. If the refinement conflicts with recorded decisions, surface the conflict
   instead of silently overriding it.
4. Validate the DSL after editing.";

const SYNC_CODE_TO_ARCHITECT_BODY: &str = "\
Sync the architecture DSL with what the code actually does.

1. Inspect the referenced source paths and list where behavior diverges from
   the DSL: missing components, dead interfaces, renamed responsibilities.
2. Update the DSL to match reality, one divergence at a time.
3. Where the code itself looks wrong relative to recorded intent, note it as
   a finding; do not change code in this workflow.
4. Validate the DSL after the sync.";

const APPLY_BODY: &str = "\
Apply an approved OpenSpec change.

1. Read `proposal.md`, `design.md` (if present), and `tasks.md` for the
   change before touching code.
2. Work through `tasks.md` in order, checking off each task as it completes.
3. Keep edits within the scope the proposal declares.
4. Run the project's build and tests after each task, not only at the end.
5. When every task is checked, run `openspec validate <change-id> --strict`
   and report the result.";

const ARCHIVE_BODY: &str = "\
Archive a deployed OpenSpec change.

1. Confirm the change's tasks are complete and the change is deployed.
2. Run `openspec archive <change-id>` to fold the spec deltas into the
   canonical specs and move the change directory to the archive.
3. Review the updated canonical specs for merge artifacts.
4. Run `openspec validate --strict` on the result and report anything the
   archive left inconsistent.";
