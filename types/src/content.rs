//! Static page content.
//!
//! Everything here is display data about the documented traceability system.
//! None of it is executed: the endpoints are never called, the tables never
//! queried.

use crate::Accent;

/// Page sections in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    TechStack,
    Architecture,
    Process,
    Database,
    Api,
    Progress,
    Goals,
    Footer,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Hero,
        Section::TechStack,
        Section::Architecture,
        Section::Process,
        Section::Database,
        Section::Api,
        Section::Progress,
        Section::Goals,
        Section::Footer,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: Section,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        label: "아키텍처",
        target: Section::Architecture,
    },
    NavItem {
        label: "프로세스",
        target: Section::Process,
    },
    NavItem {
        label: "데이터베이스",
        target: Section::Database,
    },
    NavItem {
        label: "API",
        target: Section::Api,
    },
    NavItem {
        label: "진행현황",
        target: Section::Progress,
    },
    NavItem {
        label: "목표",
        target: Section::Goals,
    },
];

pub const SITE_NAME: &str = "QR Project";

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

pub struct Hero {
    pub badge: &'static str,
    pub title: &'static str,
    pub title_emphasis: &'static str,
    pub subtitle: &'static [&'static str],
    pub period: &'static str,
    pub affiliation: &'static str,
}

pub const HERO: Hero = Hero {
    badge: "인턴십 프로젝트",
    title: "QR 기반 제품 이력",
    title_emphasis: "추적 시스템",
    subtitle: &[
        "제품 생산부터 고객 사용까지 전 과정 데이터를 축적하고,",
        "실시간 분석으로 품질 개선 및 고객 서비스에 활용하는 통합 플랫폼",
    ],
    period: "2025.12 - 2026.01",
    affiliation: "기업 인턴십",
};

// ---------------------------------------------------------------------------
// Tech stack
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub accent: Accent,
}

pub const TECH_STACK_TITLE: &str = "사용 기술";

pub const TECHNOLOGIES: [Technology; 8] = [
    Technology {
        name: "Node.js",
        accent: Accent::Green,
    },
    Technology {
        name: "Express",
        accent: Accent::Gray,
    },
    Technology {
        name: "MySQL",
        accent: Accent::Blue,
    },
    Technology {
        name: "Python",
        accent: Accent::Yellow,
    },
    Technology {
        name: "JavaScript",
        accent: Accent::Yellow,
    },
    Technology {
        name: "HTML/CSS",
        accent: Accent::Orange,
    },
    Technology {
        name: "NLP (soynlp)",
        accent: Accent::Purple,
    },
    Technology {
        name: "GeoIP",
        accent: Accent::Cyan,
    },
];

// ---------------------------------------------------------------------------
// Architecture
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchNode {
    pub title: &'static str,
    pub lines: [&'static str; 2],
    pub accent: Accent,
}

pub const ARCHITECTURE_TITLE: &str = "전체 시스템 아키텍처";
pub const ARCHITECTURE_SUBTITLE: &str = "Overview";

/// Nodes left to right. Links between them are one-way except the last,
/// which is bidirectional (server and analysis engine exchange data).
pub const ARCHITECTURE: [ArchNode; 4] = [
    ArchNode {
        title: "사용자 (Client)",
        lines: ["웹 브라우저", "생산 관리자 / QC 검사자 / 고객"],
        accent: Accent::Violet,
    },
    ArchNode {
        title: "웹 서버",
        lines: ["Node.js / Express", "API 처리, 비즈니스 로직"],
        accent: Accent::Emerald,
    },
    ArchNode {
        title: "데이터베이스",
        lines: ["MySQL", "데이터 영구 저장"],
        accent: Accent::Pink,
    },
    ArchNode {
        title: "분석 엔진",
        lines: ["Python", "NLP 키워드 분석"],
        accent: Accent::Cyan,
    },
];

/// Whether the link after node `index` runs both ways.
#[must_use]
pub const fn architecture_link_is_bidirectional(index: usize) -> bool {
    index + 2 == ARCHITECTURE.len()
}

pub const PROCESS_TITLE: &str = "상세 데이터 흐름";
pub const PROCESS_SUBTITLE: &str = "Process Flow";
pub const PURPOSE_LABEL: &str = "목적";

// ---------------------------------------------------------------------------
// Database
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataCategory {
    pub title: &'static str,
    pub items: &'static [&'static str],
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DbTable {
    pub name: &'static str,
    pub description: &'static str,
}

pub const DATABASE_TITLE: &str = "데이터 관리 구조";
pub const DATABASE_SUBTITLE: &str = "모든 데이터는 시리얼 번호를 기준으로 연결됩니다";
pub const DATABASE_TABLES_TITLE: &str = "주요 테이블 구조";

pub const DATA_CATEGORIES: [DataCategory; 5] = [
    DataCategory {
        title: "생산 기초 데이터",
        items: &[
            "시리얼번호",
            "모델",
            "제품군",
            "고객명",
            "수주번호",
            "납기일",
            "규격",
            "전기사양",
            "담당자",
        ],
        accent: Accent::Violet,
    },
    DataCategory {
        title: "QC 검사 데이터",
        items: &[
            "검사일",
            "검사자",
            "구성품 시리얼",
            "필터 타입",
            "제조사",
            "측정값",
            "표준값",
            "최종 판정",
        ],
        accent: Accent::Emerald,
    },
    DataCategory {
        title: "고객 스캔 데이터",
        items: &["스캔 시간", "GPS 위치", "IP", "디바이스 정보"],
        accent: Accent::Pink,
    },
    DataCategory {
        title: "고객 피드백 데이터",
        items: &["피드백 내용", "평점", "GPS", "제출 시간"],
        accent: Accent::Cyan,
    },
    DataCategory {
        title: "분석 결과 데이터",
        items: &["키워드", "빈도", "분석 일시"],
        accent: Accent::Orange,
    },
];

pub const DB_TABLES: [DbTable; 11] = [
    DbTable {
        name: "serial_gen_master",
        description: "생산 시리얼 마스터 (엑셀 데이터 기반)",
    },
    DbTable {
        name: "equipment_master",
        description: "QC 검사 마스터 정보",
    },
    DbTable {
        name: "inspection_1st / 2nd / final",
        description: "QC 검사 상세 (부품, 성능, 최종)",
    },
    DbTable {
        name: "installed_products",
        description: "제품 설치/납품 이력",
    },
    DbTable {
        name: "products",
        description: "제품 마스터",
    },
    DbTable {
        name: "product_categories",
        description: "제품 카테고리",
    },
    DbTable {
        name: "customers",
        description: "고객사 정보",
    },
    DbTable {
        name: "scan_logs",
        description: "QR 스캔 이력 (IP, 위치, 시간)",
    },
    DbTable {
        name: "feedback",
        description: "고객 피드백",
    },
    DbTable {
        name: "analysis_keywords",
        description: "NLP 분석 결과 (키워드 빈도)",
    },
    DbTable {
        name: "validations",
        description: "VD(검증) 정보",
    },
];

// ---------------------------------------------------------------------------
// API
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }

    #[must_use]
    pub const fn accent(self) -> Accent {
        match self {
            Self::Get => Accent::Emerald,
            Self::Post => Accent::Blue,
            Self::Delete => Accent::Rose,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiEndpoint {
    pub method: HttpMethod,
    pub path: &'static str,
    pub description: &'static str,
}

pub const API_TITLE: &str = "API 엔드포인트";
pub const API_SUBTITLE: &str = "주요 REST API 목록";
pub const API_CARD_TITLE: &str = "RESTful API";

pub const API_ENDPOINTS: [ApiEndpoint; 10] = [
    ApiEndpoint {
        method: HttpMethod::Post,
        path: "/api/admin/production/serial",
        description: "생산 시리얼 저장",
    },
    ApiEndpoint {
        method: HttpMethod::Get,
        path: "/api/admin/production/list",
        description: "생산 목록 조회",
    },
    ApiEndpoint {
        method: HttpMethod::Post,
        path: "/api/admin/inspection/report",
        description: "QC 리포트 저장",
    },
    ApiEndpoint {
        method: HttpMethod::Get,
        path: "/api/admin/inspection/report/:serial",
        description: "QC 리포트 조회",
    },
    ApiEndpoint {
        method: HttpMethod::Get,
        path: "/api/export/excel/:serial",
        description: "엑셀 성적서 다운로드",
    },
    ApiEndpoint {
        method: HttpMethod::Get,
        path: "/api/scan/qr-scan/:serial",
        description: "QR 스캔 처리",
    },
    ApiEndpoint {
        method: HttpMethod::Get,
        path: "/api/product-history/:serial",
        description: "제품 이력 조회",
    },
    ApiEndpoint {
        method: HttpMethod::Post,
        path: "/api/feedback",
        description: "피드백 제출",
    },
    ApiEndpoint {
        method: HttpMethod::Get,
        path: "/api/admin/analysis/keywords",
        description: "키워드 분석 결과",
    },
    ApiEndpoint {
        method: HttpMethod::Delete,
        path: "/api/admin/production/serial/:serial",
        description: "생산 데이터 삭제",
    },
];

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

pub const PROGRESS_TITLE: &str = "현재 진행 상태";
pub const PROGRESS_SUBTITLE: &str = "프로젝트 완료 현황 및 인프라 정보";
pub const INFRASTRUCTURE_TITLE: &str = "인프라 현황";
pub const OVERALL_PROGRESS_LABEL: &str = "전체 진행률";
pub const COMPLETED_TITLE: &str = "완료 항목";
pub const NEEDS_SETUP_TITLE: &str = "설정 필요";
pub const NOT_IMPLEMENTED_TITLE: &str = "미구현";

pub const COMPLETED: [&str; 7] = [
    "생산 데이터 입력 및 시리얼 생성 (웹 입력 + 엑셀 자동 업로드)",
    "QC 3단계 검사 데이터 입력/조회 (1st/2nd/Final)",
    "엑셀 성적서 자동 출력 (DB → 엑셀 템플릿 자동 매핑)",
    "QR 코드 생성 및 출력",
    "QR 스캔 로그 기록 (GPS, IP, 디바이스 자동 수집)",
    "관리자 대시보드 (피드백 목록, 키워드 분석 차트)",
    "방문자 예약 시스템 (이메일 알림 발송)",
];

pub const NEEDS_SETUP: [&str; 4] = [
    "고객 피드백 서비스: 기능 구현 완료, 테스트 후 정식 오픈",
    "데이터 자동 동기화: 스크립트 완성, 작업 스케줄러 등록 필요",
    "카카오톡 알림: 코드 작성 완료, 현재 비활성 상태",
    "서버 모니터링: 화면 구현 완료, 실제 데이터 연동 필요",
];

pub const NOT_IMPLEMENTED: [&str; 3] = [
    "영업/물류 프로세스 (출하/납품 관리 기능)",
    "교체 주기 알림 (고객 대상 사전 알림 발송)",
    "AS 유형별 담당자 자동 배정",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfraItem {
    pub label: &'static str,
    pub value: &'static str,
}

pub const INFRASTRUCTURE: [InfraItem; 4] = [
    InfraItem {
        label: "서버 OS",
        value: "Windows Server",
    },
    InfraItem {
        label: "데이터베이스",
        value: "MySQL",
    },
    InfraItem {
        label: "웹 서버",
        value: "Node.js (Express)",
    },
    InfraItem {
        label: "분석 엔진",
        value: "Python (soynlp)",
    },
];

/// Counts behind the overall progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub completed: usize,
    pub needs_setup: usize,
    pub not_implemented: usize,
}

impl ProgressSummary {
    #[must_use]
    pub const fn current() -> Self {
        Self {
            completed: COMPLETED.len(),
            needs_setup: NEEDS_SETUP.len(),
            not_implemented: NOT_IMPLEMENTED.len(),
        }
    }

    #[must_use]
    pub const fn total(self) -> usize {
        self.completed + self.needs_setup + self.not_implemented
    }

    /// Items that are built, whether or not they still need setup.
    #[must_use]
    pub const fn done(self) -> usize {
        self.completed + self.needs_setup
    }

    #[must_use]
    pub fn completed_percent(self) -> u8 {
        percent(self.completed, self.total())
    }

    #[must_use]
    pub fn setup_percent(self) -> u8 {
        percent(self.needs_setup, self.total())
    }
}

/// Rounded share of `part` in `total`, half rounding up.
fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round().min(100.0) as u8
}

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Goal {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const GOALS_TITLE: &str = "프로젝트 최종 목표";
pub const GOALS_SUBTITLE: &str = "Project Goals & Expected Effects";
pub const EFFECTS_TITLE: &str = "기대 효과";

pub const GOALS: [Goal; 5] = [
    Goal {
        title: "데이터 축적",
        description: "생산/QC/피드백 데이터 DB화",
        accent: Accent::Violet,
    },
    Goal {
        title: "추적성 확보",
        description: "제품 전 과정 이력 관리",
        accent: Accent::Emerald,
    },
    Goal {
        title: "사전 알림",
        description: "교체주기 도래 시 알림",
        accent: Accent::Amber,
    },
    Goal {
        title: "패턴 분석",
        description: "불량 원인 추적 및 예측",
        accent: Accent::Cyan,
    },
    Goal {
        title: "플랫폼 사업화",
        description: "데이터/기술 수수료 비즈니스",
        accent: Accent::Pink,
    },
];

pub const EXPECTED_EFFECTS: [&str; 5] = [
    "제품 시리얼 단위 전 과정 추적으로 불량 원인 역추적 가능",
    "특정 지역, 특정 생산자의 결함 패턴 파악",
    "고객에게 교체 주기 사전 알림 → 선제적 서비스 제공",
    "AS 유형별 담당자 자동 배정 (AS 데이터 → AS 담당자, VD 데이터 → VD 담당자)",
    "축적된 데이터의 외부 제공을 통한 수익 모델 확보 가능성",
];

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

pub const CTA_TITLE: &str = "함께 일하고 싶으신가요?";
pub const CTA_LINES: [&str; 2] = [
    "데이터 기반 시스템 구축, 풀스택 개발에 관심이 있습니다.",
    "새로운 기회에 도전하고 싶습니다! 연락주세요!",
];
pub const CTA_BUTTON: Link = Link {
    label: "연락하기",
    href: "mailto:your@email.com",
};

pub const ABOUT_LINES: [&str; 2] = [
    "QR 기반 제품 이력 추적 시스템 프로젝트입니다.",
    "인턴십 기간 동안 기획부터 개발, 배포까지 전 과정을 담당했습니다.",
];

pub const PROJECT_LINKS_TITLE: &str = "프로젝트";
pub const PROJECT_LINKS: [Link; 3] = [
    Link {
        label: "프로젝트 소스코드",
        href: "#",
    },
    Link {
        label: "기술 블로그",
        href: "#",
    },
    Link {
        label: "이력서",
        href: "#",
    },
];

pub const SOCIAL_LINKS_TITLE: &str = "소셜";
pub const SOCIAL_LINKS: [Link; 3] = [
    Link {
        label: "GitHub",
        href: "https://github.com",
    },
    Link {
        label: "LinkedIn",
        href: "https://linkedin.com",
    },
    Link {
        label: "Email",
        href: "mailto:cnumin999@gmail.com",
    },
];

pub const COPYRIGHT: &str = "© 2025 QR Project Portfolio. All rights reserved.";
pub const BUILT_WITH: &str = "Built with Rust, ratatui & crossterm";

#[cfg(test)]
mod tests {
    use super::{
        API_ENDPOINTS, ARCHITECTURE, HttpMethod, NAV_ITEMS, ProgressSummary, Section,
        architecture_link_is_bidirectional,
    };

    #[test]
    fn progress_percentages_round_like_the_page() {
        let summary = ProgressSummary::current();
        assert_eq!(summary.total(), 14);
        assert_eq!(summary.done(), 11);
        assert_eq!(summary.completed_percent(), 50);
        assert_eq!(summary.setup_percent(), 29);
    }

    #[test]
    fn empty_progress_is_zero_percent() {
        let summary = ProgressSummary {
            completed: 0,
            needs_setup: 0,
            not_implemented: 0,
        };
        assert_eq!(summary.completed_percent(), 0);
    }

    #[test]
    fn api_table_order() {
        let rows: Vec<_> = API_ENDPOINTS
            .iter()
            .map(|api| (api.method, api.path))
            .collect();
        assert_eq!(
            rows,
            vec![
                (HttpMethod::Post, "/api/admin/production/serial"),
                (HttpMethod::Get, "/api/admin/production/list"),
                (HttpMethod::Post, "/api/admin/inspection/report"),
                (HttpMethod::Get, "/api/admin/inspection/report/:serial"),
                (HttpMethod::Get, "/api/export/excel/:serial"),
                (HttpMethod::Get, "/api/scan/qr-scan/:serial"),
                (HttpMethod::Get, "/api/product-history/:serial"),
                (HttpMethod::Post, "/api/feedback"),
                (HttpMethod::Get, "/api/admin/analysis/keywords"),
                (HttpMethod::Delete, "/api/admin/production/serial/:serial"),
            ]
        );
    }

    #[test]
    fn nav_targets_follow_page_order() {
        let indices: Vec<_> = NAV_ITEMS.iter().map(|item| item.target.index()).collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn section_index_matches_all() {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn only_last_architecture_link_is_bidirectional() {
        let links: Vec<_> = (0..ARCHITECTURE.len() - 1)
            .map(architecture_link_is_bidirectional)
            .collect();
        assert_eq!(links, vec![false, false, true]);
    }
}
