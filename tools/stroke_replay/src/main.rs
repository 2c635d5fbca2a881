use std::{
    env,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    process,
};

// Link the host time driver and critical-section impl the library expects.
use critical_section as _;
use embassy_time as _;

use smartwake::{GestureKey, InputEvent, StrokeController};

struct TraceLine {
    line_no: usize,
    event: InputEvent,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let mut trace_path: Option<PathBuf> = None;
    let mut expected: Option<Vec<GestureKey>> = None;
    let mut show_octants = false;

    let mut idx = 1usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--expect" => {
                idx += 1;
                let Some(value) = args.get(idx) else {
                    return Err("missing keys after --expect".into());
                };
                expected = Some(parse_expected_keys(value)?);
            }
            "--octants" => show_octants = true,
            "-h" | "--help" => {
                println!("{}", usage());
                return Ok(());
            }
            value if value.starts_with('-') => {
                return Err(format!("unknown argument: {value}"));
            }
            value => {
                if trace_path.is_some() {
                    return Err("multiple trace paths provided".into());
                }
                trace_path = Some(PathBuf::from(value));
            }
        }
        idx += 1;
    }

    let trace_path = trace_path.ok_or_else(usage)?;
    let lines = parse_trace(&trace_path)?;

    let mut controller = StrokeController::new();
    let mut keys: Vec<GestureKey> = Vec::new();
    println!("key,line,label,code");
    for line in &lines {
        let lifting = matches!(line.event, InputEvent::Lift | InputEvent::TrackingId(-1));
        if show_octants && lifting && controller.is_tracking() {
            let octants: Vec<&str> = controller.buffer().octants().map(|o| o.label()).collect();
            println!(
                "octants,{},{},sum={}",
                line.line_no,
                octants.join(" "),
                controller.buffer().octant_sum()
            );
        }
        if let Some(key) = controller.handle(line.event) {
            println!("key,{},{},{}", line.line_no, key.as_str(), key.code());
            keys.push(key);
        }
    }
    if controller.is_tracking() {
        eprintln!("warning: trace ends mid-stroke; no lift seen");
    }

    if let Some(expected) = expected {
        if keys != expected {
            eprintln!("expected keys: {}", join_labels(&expected));
            eprintln!("actual keys:   {}", join_labels(&keys));
            return Err("key sequence mismatch".into());
        }
    }

    Ok(())
}

fn usage() -> String {
    "usage: stroke_replay <trace.txt> [--expect <key[,key..]|none>] [--octants]".to_string()
}

fn join_labels(keys: &[GestureKey]) -> String {
    if keys.is_empty() {
        return "none".to_string();
    }
    keys.iter()
        .map(|key| key.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_expected_keys(value: &str) -> Result<Vec<GestureKey>, String> {
    if value.trim().eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }
    value
        .split(',')
        .map(|token| {
            GestureKey::from_label(token.trim())
                .ok_or_else(|| format!("invalid expected key: {}", token.trim()))
        })
        .collect()
}

fn parse_trace(path: &Path) -> Result<Vec<TraceLine>, String> {
    let file = File::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    let reader = BufReader::new(file);

    let mut out = Vec::new();
    for (line_no, line_result) in reader.lines().enumerate() {
        let line_no = line_no + 1;
        let line = line_result
            .map_err(|e| format!("failed to read {}:{}: {e}", path.display(), line_no))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let arity = |n: usize| -> Result<(), String> {
            if parts.len() == n + 1 {
                Ok(())
            } else {
                Err(format!(
                    "{}:{} '{}' takes {} value(s)",
                    path.display(),
                    line_no,
                    parts[0],
                    n
                ))
            }
        };

        match parts[0] {
            "x" => {
                arity(1)?;
                let x = parse_i32(parts[1], path, line_no, "x")?;
                out.push(TraceLine {
                    line_no,
                    event: InputEvent::PositionX(x),
                });
            }
            "y" => {
                arity(1)?;
                let y = parse_i32(parts[1], path, line_no, "y")?;
                out.push(TraceLine {
                    line_no,
                    event: InputEvent::PositionY(y),
                });
            }
            "p" => {
                arity(2)?;
                let x = parse_i32(parts[1], path, line_no, "x")?;
                let y = parse_i32(parts[2], path, line_no, "y")?;
                out.push(TraceLine {
                    line_no,
                    event: InputEvent::PositionX(x),
                });
                out.push(TraceLine {
                    line_no,
                    event: InputEvent::PositionY(y),
                });
            }
            "id" => {
                arity(1)?;
                let id = parse_i32(parts[1], path, line_no, "id")?;
                out.push(TraceLine {
                    line_no,
                    event: InputEvent::TrackingId(id),
                });
            }
            "slot" => {
                arity(0)?;
                out.push(TraceLine {
                    line_no,
                    event: InputEvent::SlotChange,
                });
            }
            "lift" => {
                arity(0)?;
                out.push(TraceLine {
                    line_no,
                    event: InputEvent::Lift,
                });
            }
            other => {
                return Err(format!(
                    "{}:{} unknown trace command: {}",
                    path.display(),
                    line_no,
                    other
                ));
            }
        }
    }

    Ok(out)
}

fn parse_i32(raw: &str, path: &Path, line_no: usize, field: &str) -> Result<i32, String> {
    raw.trim().parse::<i32>().map_err(|e| {
        format!(
            "{}:{} invalid {} '{}': {}",
            path.display(),
            line_no,
            field,
            raw.trim(),
            e
        )
    })
}
