//! koyong - 활용표 JSON을 읽어 활용/역탐색 질의를 실행하는 CLI

use std::env;
use std::process;

use koyong::engine::SplitOutcome;
use koyong::Paradigm;

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        eprintln!("사용법: koyong <활용표.json> conjugate <표제어>");
        eprintln!("        koyong <활용표.json> resolve <표면형>");
        process::exit(2);
    }

    let paradigm = match Paradigm::from_json_file(&args[1]) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("활용표 적재 실패: {}", e);
            process::exit(1);
        }
    };

    match args[2].as_str() {
        "conjugate" => {
            let forms = paradigm.conjugate_lemma(&args[3]);
            if forms.is_empty() {
                eprintln!("어휘에 없는 표제어: {}", args[3]);
                process::exit(1);
            }
            for form in forms {
                match serde_json::to_string(&form) {
                    Ok(line) => println!("{}", line),
                    Err(e) => eprintln!("직렬화 실패: {}", e),
                }
            }
        }
        "resolve" => {
            let resolution = paradigm.resolve(&args[3]);
            for split in &resolution.splits {
                match &split.outcome {
                    SplitOutcome::NoCompatibleVerbClass => {
                        eprintln!("분할 탈락 (어미 '{}'): 호환 동사 부류 없음", split.ending);
                    }
                    SplitOutcome::NoLexiconMatch => {
                        eprintln!("분할 탈락 (어미 '{}'): 맞는 표제어 없음", split.ending);
                    }
                    SplitOutcome::Matched(_) => {}
                }
            }
            if !resolution.has_candidates() {
                eprintln!("후보 없음: {}", args[3]);
                process::exit(1);
            }
            for candidate in resolution.candidates() {
                match serde_json::to_string(candidate) {
                    Ok(line) => println!("{}", line),
                    Err(e) => eprintln!("직렬화 실패: {}", e),
                }
            }
        }
        cmd => {
            eprintln!("알 수 없는 명령: {}", cmd);
            process::exit(2);
        }
    }
}
