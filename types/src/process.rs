//! The process-flow catalog: four documented business workflows.
//!
//! The catalog is immutable and known at build time. Step order within a
//! category is the order the steps are rendered in.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::Accent;

/// Stage tag for a step in a process timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Input,
    Request,
    Process,
    Save,
    Result,
    Trigger,
}

impl StepKind {
    pub const ALL: [StepKind; 6] = [
        StepKind::Input,
        StepKind::Request,
        StepKind::Process,
        StepKind::Save,
        StepKind::Result,
        StepKind::Trigger,
    ];

    /// Badge label shown next to the step.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Input => "입력",
            Self::Request => "요청",
            Self::Process => "처리",
            Self::Save => "저장",
            Self::Result => "결과",
            Self::Trigger => "트리거",
        }
    }

    /// Badge color.
    #[must_use]
    pub const fn accent(self) -> Accent {
        match self {
            Self::Input => Accent::Violet,
            Self::Request => Accent::Rose,
            Self::Process => Accent::Emerald,
            Self::Save => Accent::Pink,
            Self::Result => Accent::Cyan,
            Self::Trigger => Accent::Orange,
        }
    }

    /// Whether the badge needs dark text for legibility (light badge color).
    #[must_use]
    pub const fn dark_label(self) -> bool {
        matches!(self, Self::Result)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    pub text: &'static str,
    pub detail: Option<&'static str>,
}

impl Step {
    const fn new(kind: StepKind, text: &'static str) -> Self {
        Self {
            kind,
            text,
            detail: None,
        }
    }

    const fn with_detail(kind: StepKind, text: &'static str, detail: &'static str) -> Self {
        Self {
            kind,
            text,
            detail: Some(detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessCategory {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub purpose: &'static str,
    pub accent: Accent,
    pub steps: &'static [Step],
}

/// Typed identifier of a catalog entry.
///
/// Holding a `ProcessId` is proof the id names one of the four categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProcessId {
    #[default]
    Production,
    Qc,
    QrScan,
    Feedback,
}

impl ProcessId {
    pub const ALL: [ProcessId; 4] = [
        ProcessId::Production,
        ProcessId::Qc,
        ProcessId::QrScan,
        ProcessId::Feedback,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Qc => "qc",
            Self::QrScan => "qrscan",
            Self::Feedback => "feedback",
        }
    }

    /// Position in catalog order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Production => 0,
            Self::Qc => 1,
            Self::QrScan => 2,
            Self::Feedback => 3,
        }
    }

    /// Next tab in catalog order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab in catalog order, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown process `{0}` (expected one of: production, qc, qrscan, feedback)")]
pub struct UnknownProcessError(pub String);

impl FromStr for ProcessId {
    type Err = UnknownProcessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownProcessError(s.to_string()))
    }
}

/// Looks up a category by id.
#[must_use]
pub fn find_process(id: &str) -> Option<&'static ProcessCategory> {
    PROCESS_CATALOG.iter().find(|process| process.id == id)
}

use StepKind::{Input, Process, Request, Result as Outcome, Save, Trigger};

pub static PROCESS_CATALOG: [ProcessCategory; 4] = [
    ProcessCategory {
        id: "production",
        title: "A. 생산 시리얼 생성 및 관리",
        subtitle: "Production",
        purpose: "생산 계획을 입력하고 시리얼 번호를 생성하여 DB에 저장",
        accent: Accent::Violet,
        steps: &[
            Step::new(
                Input,
                "관리자가 웹 페이지에서 제품군, 모델명, 수량, 담당자 입력",
            ),
            Step::with_detail(Request, "API 호출", "POST /api/admin/production/serial"),
            Step::new(
                Process,
                "서버에서 중복 확인 후 데이터 가공 (날짜, 시리얼 번호 생성)",
            ),
            Step::with_detail(
                Save,
                "DB에 생산 정보 저장",
                "INSERT/UPDATE → serial_gen_master",
            ),
            Step::new(Outcome, "저장 완료 메시지 반환 및 목록 갱신"),
        ],
    },
    ProcessCategory {
        id: "qc",
        title: "B. QC 성적서 등록",
        subtitle: "Quality Control",
        purpose: "제품 검사 결과를 저장하고, 엑셀 성적서를 생성할 준비를 함",
        accent: Accent::Emerald,
        steps: &[
            Step::new(
                Input,
                "검사자가 웹 페이지에서 1차/2차/최종 검사 결과 입력",
            ),
            Step::with_detail(Request, "API 호출", "POST /api/admin/inspection/report"),
            Step::with_detail(
                Save,
                "검사 마스터 정보 저장",
                "INSERT/UPDATE → equipment_master",
            ),
            Step::with_detail(
                Save,
                "상세 검사 수치 저장",
                "DELETE + INSERT → inspection_1st, inspection_2nd, inspection_final",
            ),
            Step::with_detail(
                Process,
                "QR 연동을 위해 제품 정보 자동 등록",
                "INSERT/UPDATE → installed_products",
            ),
            Step::with_detail(
                Outcome,
                "QC 상태를 '완료'로 변경",
                "UPDATE serial_gen_master SET qc_inspection = '완료'",
            ),
        ],
    },
    ProcessCategory {
        id: "qrscan",
        title: "C. QR 스캔 및 추적",
        subtitle: "QR Scan & Tracking",
        purpose: "고객이 QR을 찍었을 때 로그를 남기고 상세 정보를 보여줌",
        accent: Accent::Pink,
        steps: &[
            Step::with_detail(
                Input,
                "사용자가 스마트폰으로 QR 코드 스캔",
                "http://서버주소/api/scan/qr-scan/:serial_no",
            ),
            Step::new(
                Process,
                "서버에서 접속자 IP, 위치(GeoIP), 디바이스 정보 파싱",
            ),
            Step::with_detail(Save, "스캔 이력 저장", "INSERT → scan_logs"),
            Step::with_detail(
                Process,
                "사용자를 제품 상세 페이지로 리다이렉트",
                "Redirect → serial_detail.html",
            ),
            Step::with_detail(
                Outcome,
                "상세 페이지 로딩 시 제품 정보 조회 후 화면 표시",
                "GET /api/product-history/:serial",
            ),
        ],
    },
    ProcessCategory {
        id: "feedback",
        title: "D. 고객 피드백 및 분석",
        subtitle: "Feedback Loop",
        purpose: "고객의 불만/의견을 접수하고 Python으로 분석",
        accent: Accent::Cyan,
        steps: &[
            Step::new(
                Input,
                "고객이 상세 페이지에서 피드백(내용, 별점) 작성 후 전송",
            ),
            Step::with_detail(Request, "API 호출", "POST /api/feedback"),
            Step::with_detail(
                Save,
                "피드백 데이터 저장",
                "INSERT → feedback, service_history",
            ),
            Step::with_detail(
                Trigger,
                "서버가 백그라운드에서 Python 스크립트 실행",
                "spawn('python', ['run_analysis.py'])",
            ),
            Step::new(
                Process,
                "Python이 DB에서 최근 피드백을 읽어 형태소 분석(soynlp) 수행",
            ),
            Step::with_detail(
                Outcome,
                "분석된 키워드 빈도수를 DB에 저장 (대시보드용)",
                "INSERT/UPDATE → analysis_keywords",
            ),
        ],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{PROCESS_CATALOG, ProcessId, StepKind, find_process};

    #[test]
    fn catalog_has_four_unique_ids() {
        let ids: HashSet<_> = PROCESS_CATALOG.iter().map(|p| p.id).collect();
        assert_eq!(PROCESS_CATALOG.len(), 4);
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn typed_ids_match_catalog_order() {
        for id in ProcessId::ALL {
            assert_eq!(PROCESS_CATALOG[id.index()].id, id.as_str());
        }
    }

    #[test]
    fn every_step_kind_is_enumerated() {
        for process in &PROCESS_CATALOG {
            assert!(!process.steps.is_empty(), "{} has no steps", process.id);
            for step in process.steps {
                assert!(StepKind::ALL.contains(&step.kind));
            }
        }
    }

    #[test]
    fn qc_steps_keep_authored_order() {
        let qc = find_process("qc").expect("qc is in the catalog");
        let kinds: Vec<_> = qc.steps.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Input,
                StepKind::Request,
                StepKind::Save,
                StepKind::Save,
                StepKind::Process,
                StepKind::Result,
            ]
        );
        assert_eq!(qc.steps[2].detail, Some("INSERT/UPDATE → equipment_master"));
    }

    #[test]
    fn only_feedback_uses_trigger() {
        let with_trigger: Vec<_> = PROCESS_CATALOG
            .iter()
            .filter(|p| p.steps.iter().any(|s| s.kind == StepKind::Trigger))
            .map(|p| p.id)
            .collect();
        assert_eq!(with_trigger, vec!["feedback"]);
    }

    #[test]
    fn parse_rejects_unknown_ids() {
        assert_eq!("qrscan".parse::<ProcessId>().unwrap(), ProcessId::QrScan);
        let err = "shipping".parse::<ProcessId>().unwrap_err();
        assert!(err.to_string().contains("shipping"));
        assert!(find_process("shipping").is_none());
    }

    #[test]
    fn tab_cycling_wraps() {
        assert_eq!(ProcessId::Feedback.next(), ProcessId::Production);
        assert_eq!(ProcessId::Production.previous(), ProcessId::Feedback);
        assert_eq!(ProcessId::Qc.next().previous(), ProcessId::Qc);
    }

    #[test]
    fn step_badges() {
        assert_eq!(StepKind::Trigger.label(), "트리거");
        assert!(StepKind::Result.dark_label());
        assert!(!StepKind::Input.dark_label());
    }
}
