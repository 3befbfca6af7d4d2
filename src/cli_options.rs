use std::collections::HashMap;

pub struct CliOptions {
    pub scene_file: Option<String>,
    pub use_multi_thread: bool,
    pub num_threads: Option<usize>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            scene_file: None,
            use_multi_thread: true,
            num_threads: None,
        }
    }
}

impl CliOptions {
    pub fn message() -> &'static str {
        r#"raycast <scene_file>
        --use_multi_thread | --use_single_thread
        --num_threads <n>
        "#
    }
}

pub fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut pairs: HashMap<String, Option<String>> = HashMap::new();
    let mut positional: Vec<String> = vec![];
    let mut args = args.into_iter().rev().collect::<Vec<_>>();
    args.pop(); // Removes args[0]

    while let Some(key) = args.pop() {
        if !key.starts_with('-') {
            positional.push(key);
            continue;
        }
        match args.last() {
            None => {
                pairs.insert(key, None);
            }
            Some(value) => {
                if value.starts_with('-') {
                    pairs.insert(key, None);
                } else {
                    let value = args.pop();
                    pairs.insert(key, value);
                }
            }
        }
    }

    let mut options = CliOptions::default();
    match positional.len() {
        0 => {}
        1 => options.scene_file = positional.pop(),
        _ => return Err(format!("expected one scene file, got {:?}", positional)),
    }
    for (k, v) in pairs.into_iter() {
        match k.as_str() {
            "--use_multi_thread" => options.use_multi_thread = true,
            "--use_single_thread" => options.use_multi_thread = false,
            "--num_threads" => {
                let n = v.ok_or("--num_threads needs a value")?;
                let n = n
                    .parse::<usize>()
                    .map_err(|_| format!("invalid thread count {}", n))?;
                options.num_threads = Some(n);
            }
            "--help" => {
                println!("usage: {}", CliOptions::message());
            }
            _ => return Err(format!("Unrecognized key {}", k)),
        }
    }
    Ok(options)
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("raycast")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn positional_scene_file() {
        let options = parse_args(args(&["scene.txt"])).unwrap();
        assert_eq!(options.scene_file.as_deref(), Some("scene.txt"));
        assert!(options.use_multi_thread);
    }

    #[test]
    fn single_thread_flag() {
        let options = parse_args(args(&["scene.txt", "--use_single_thread"])).unwrap();
        assert!(!options.use_multi_thread);
    }

    #[test]
    fn thread_count() {
        let options = parse_args(args(&["--num_threads", "3", "scene.txt"])).unwrap();
        assert_eq!(options.num_threads, Some(3));
    }

    #[test]
    fn rejects_extra_positionals_and_bad_flags() {
        assert!(parse_args(args(&["a.txt", "b.txt"])).is_err());
        assert!(parse_args(args(&["--frobnicate"])).is_err());
        assert!(parse_args(args(&["--num_threads", "many"])).is_err());
    }
}
