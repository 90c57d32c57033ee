//! Repository Map 통합 테스트
//!
//! 실제 임시 디렉토리를 스캔하여 예산/평면 목록 규칙을 검증

use bridge_core::{
    DisplayPaths, RepoMapGenerator, RepoMapOptions, TokenBudgetAssembler, REPO_MAP_PREAMBLE,
};
use bridge_foundation::estimate_tokens;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

fn write(root: &Path, rel: &str, content: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

/// (시그니처 블록 헤더, 평면 목록 항목)
fn sections(map: &str) -> (Vec<String>, Vec<String>) {
    let body = map.strip_prefix(REPO_MAP_PREAMBLE).expect("preamble");
    let mut headers = Vec::new();
    let mut flat = Vec::new();
    for line in body.lines() {
        if line.is_empty() || line.starts_with("  ") {
            continue;
        }
        match line.strip_suffix(':') {
            Some(header) => headers.push(header.to_string()),
            None => flat.push(line.to_string()),
        }
    }
    (headers, flat)
}

#[tokio::test]
async fn single_python_file_lists_both_signatures() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.py", b"def foo():\n    pass\n\nclass Bar:\n    x = 1\n");

    let generator = RepoMapGenerator::with_defaults(vec![dir.path().to_path_buf()]);
    let map = generator.generate().await;

    assert_eq!(
        map,
        format!("{}a.py:\n  def foo():\n  class Bar:\n\n", REPO_MAP_PREAMBLE)
    );
}

#[tokio::test]
async fn signature_less_files_fall_back_to_flat_list() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.py", b"def foo():\n");
    write(dir.path(), "main.go", b"package main\n");
    write(dir.path(), "node_modules/dep/index.js", b"function hidden() {}\n");

    let map = RepoMapGenerator::with_defaults(vec![dir.path().to_path_buf()])
        .generate()
        .await;

    assert_eq!(
        map,
        format!("{}a.py:\n  def foo():\n\nmain.go", REPO_MAP_PREAMBLE)
    );
}

#[tokio::test]
async fn unreadable_file_is_listed_not_summarized() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.py", b"class A:\n");
    write(dir.path(), "bad.py", &[0xff, 0xfe, 0xfd]);

    let map = RepoMapGenerator::with_defaults(vec![dir.path().to_path_buf()])
        .generate()
        .await;

    let (headers, flat) = sections(&map);
    assert_eq!(headers, vec!["a.py"]);
    assert_eq!(flat, vec!["bad.py"]);
}

#[tokio::test]
async fn stops_after_the_file_that_reaches_the_budget() {
    let dir = tempfile::tempdir().unwrap();
    let files: Vec<PathBuf> = (0..10)
        .map(|i| write(dir.path(), &format!("f{}.py", i), format!("def f{}():\n", i).as_bytes()))
        .collect();

    let assembler =
        TokenBudgetAssembler::new(DisplayPaths::relative_to(vec![dir.path().to_path_buf()]));
    let budget = estimate_tokens(REPO_MAP_PREAMBLE) + 1;
    let map = assembler.assemble(&files, budget).await;

    let (headers, flat) = sections(&map);
    assert_eq!(headers, vec!["f0.py"]);
    // 남은 9개 목록은 예산을 넘으므로 통째로 버려짐
    assert!(flat.is_empty());
}

#[tokio::test]
async fn coverage_is_mutually_exclusive_and_bounded() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..12 {
        let content = if i % 3 == 0 {
            "VALUE = 1\n".to_string()
        } else {
            format!("def handler_{}(request):\n    pass\n", i)
        };
        write(dir.path(), &format!("pkg/m{}.py", i), content.as_bytes());
    }

    for max_tokens in [0usize, 40, 80, 120, 160, 400, 4000] {
        let options = RepoMapOptions::default().with_max_tokens(max_tokens);
        let budget = options.budget.repo_map_tokens();
        let map = RepoMapGenerator::new(vec![dir.path().to_path_buf()], options)
            .generate()
            .await;

        let (headers, flat) = sections(&map);
        let headers: HashSet<_> = headers.into_iter().collect();
        let flat: HashSet<_> = flat.into_iter().collect();
        assert!(headers.is_disjoint(&flat), "max_tokens {}", max_tokens);

        // 마지막 블록 하나만큼만 초과 가능
        let largest_block = estimate_tokens("pkg/m10.py:\n  def handler_10(request):\n\n");
        assert!(
            estimate_tokens(&map) <= budget.max(estimate_tokens(REPO_MAP_PREAMBLE)) + largest_block,
            "max_tokens {}",
            max_tokens
        );
    }
}

#[tokio::test]
async fn simple_listing_mode_skips_signatures() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "a.py", b"def foo():\n");
    write(dir.path(), "src/b.ts", b"export function b() {}\n");

    let options = RepoMapOptions::default().include_signatures(false);
    let map = RepoMapGenerator::new(vec![dir.path().to_path_buf()], options)
        .generate()
        .await;

    assert!(!map.contains(REPO_MAP_PREAMBLE));
    let listed: HashSet<&str> = map.lines().collect();
    let expected: HashSet<&str> = ["a.py", "src/b.ts"].into_iter().collect();
    assert_eq!(listed, expected);
}

#[tokio::test]
async fn absolute_paths_when_relative_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "a.py", b"def foo():\n");

    let options = RepoMapOptions::default().relative_paths(false);
    let map = RepoMapGenerator::new(vec![dir.path().to_path_buf()], options)
        .generate()
        .await;

    assert!(map.contains(&format!("{}:\n", file.display())));
}

#[tokio::test]
async fn missing_root_yields_preamble_only() {
    let dir = tempfile::tempdir().unwrap();
    let map = RepoMapGenerator::with_defaults(vec![dir.path().join("missing")])
        .generate()
        .await;
    assert_eq!(map, REPO_MAP_PREAMBLE);
}
