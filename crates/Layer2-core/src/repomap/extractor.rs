//! Signature Extractor - 라인 패턴 기반 시그니처 추출
//!
//! 파서를 쓰지 않고 확장자별 라인 앵커 정규식으로 선언 라인을 골라냅니다.
//! 오탐/미탐은 허용되지만 같은 입력에는 항상 같은 결과를 냅니다.

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    /// JavaScript / TypeScript
    static ref SCRIPT_PATTERNS: Vec<Regex> = compile(&[
        r"^(export\s+)?(default\s+)?(async\s+)?function\b",
        r"^(export\s+)?(const|let|var)\s+[\w$]+\s*=\s*(async\s*)?\(",
        r"^[\w$]+\s*:\s*(async\s*)?\(",
        r"^(export\s+)?(default\s+)?(abstract\s+)?class\s+[\w$]+",
        r"^(export\s+)?(declare\s+)?interface\s+[\w$]+",
    ]);

    /// Python
    static ref PYTHON_PATTERNS: Vec<Regex> = compile(&[
        r"^(async\s+)?def\s+\w+",
        r"^class\s+\w+",
    ]);

    /// Java / C# / C / C++
    static ref MANAGED_PATTERNS: Vec<Regex> = compile(&[
        r"^(public|private|protected|internal|static|final|abstract|override|virtual|sealed|async|synchronized|extern|inline)\b[^=;]*?\b[A-Za-z_]\w*\s*\(",
        r"^[A-Za-z_][\w<>\[\],.:*&]*\s+[*&]*[A-Za-z_]\w*\s*\(",
        r"^((public|private|protected|internal|static|abstract|final|sealed|partial)\s+)*(class|interface|enum|record|struct)\s+\w+",
    ]);

    /// Go
    static ref GO_PATTERNS: Vec<Regex> = compile(&[
        r"^func\s",
        r"^type\s+\w+\s+(struct|interface)\b",
    ]);

    /// Rust
    static ref RUST_PATTERNS: Vec<Regex> = compile(&[
        r#"^(pub(\([^)]*\))?\s+)?((const|async|unsafe|extern\s+"[^"]*")\s+)*fn\s+\w+"#,
        r"^(pub(\([^)]*\))?\s+)?(struct|enum|trait|type|mod|union)\s+\w+",
        r"^(unsafe\s+)?impl\b",
    ]);
}

/// 타입 자리에 올 수 없는 키워드 (`return foo(` 같은 호출문 배제)
const STATEMENT_KEYWORDS: &[&str] = &[
    "return", "new", "else", "throw", "case", "await", "yield", "delete", "goto", "using",
    "import", "package", "do", "sizeof", "typeof",
];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static signature pattern"))
        .collect()
}

/// 확장자별 규칙 집합
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// JavaScript / TypeScript 계열
    Script,
    Python,
    /// Java, C#, C, C++ (수식어/타입 + `name(`)
    Managed,
    Go,
    Rust,
}

impl Language {
    /// 확장자로 규칙 집합 선택 (미인식은 None)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "js" | "jsx" | "mjs" | "cjs" | "ts" | "tsx" => Some(Self::Script),
            "py" => Some(Self::Python),
            "java" | "cs" | "c" | "h" | "cc" | "cpp" | "cxx" | "hpp" => Some(Self::Managed),
            "go" => Some(Self::Go),
            "rs" => Some(Self::Rust),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Python => "python",
            Self::Managed => "managed",
            Self::Go => "go",
            Self::Rust => "rust",
        }
    }

    fn patterns(&self) -> &'static [Regex] {
        match self {
            Self::Script => &SCRIPT_PATTERNS,
            Self::Python => &PYTHON_PATTERNS,
            Self::Managed => &MANAGED_PATTERNS,
            Self::Go => &GO_PATTERNS,
            Self::Rust => &RUST_PATTERNS,
        }
    }

    /// 이미 trim된 라인이 시그니처인지 판정
    pub fn is_signature(&self, line: &str) -> bool {
        if line.is_empty() {
            return false;
        }

        if *self == Self::Managed {
            let first = line
                .split(|c: char| !(c.is_alphanumeric() || c == '_'))
                .next()
                .unwrap_or("");
            if STATEMENT_KEYWORDS.contains(&first) {
                return false;
            }
        }

        self.patterns().iter().any(|re| re.is_match(line))
    }
}

/// 시그니처 추출기
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureExtractor;

impl SignatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// 시그니처 라인을 지연 순회 (미인식 확장자는 빈 시퀀스)
    pub fn extract<'a>(&self, path: &Path, content: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        Language::from_path(path).into_iter().flat_map(move |language| {
            content
                .lines()
                .map(str::trim)
                .filter(move |line| language.is_signature(line))
        })
    }
}
