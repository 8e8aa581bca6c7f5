use proptest::prelude::*;
use tmd::{Engine, Invocation, RenderMode, StdinKind};

/// Records every call the dispatcher makes.
#[derive(Default)]
struct Recorder {
    renders: Vec<(Vec<u8>, RenderMode)>,
    streams: Vec<i32>,
    status: i32,
}

impl Recorder {
    fn returning(status: i32) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }
}

impl Engine for Recorder {
    fn render_buffer(&mut self, input: &[u8], mode: RenderMode) -> tmd::Result<()> {
        self.renders.push((input.to_vec(), mode));
        Ok(())
    }

    fn process_stream(&mut self, stdin: StdinKind) -> i32 {
        self.streams.push(stdin.flag());
        self.status
    }
}

fn run(args: &[&str], stdin: StdinKind, engine: &mut Recorder) -> i32 {
    Invocation::from_args(args.iter().copied(), || stdin)
        .run(engine)
        .unwrap()
}

#[test]
fn test_args_are_joined_and_rendered() {
    let mut engine = Recorder::default();
    let status = run(&["hello", "*world*"], StdinKind::Terminal, &mut engine);

    assert_eq!(status, 0);
    assert_eq!(engine.renders, vec![(b"hello *world*".to_vec(), RenderMode::Document)]);
    assert!(engine.streams.is_empty());
}

#[test]
fn test_terminal_stream_flag() {
    let mut engine = Recorder::default();
    run(&[], StdinKind::Terminal, &mut engine);

    assert_eq!(engine.streams, vec![0]);
    assert!(engine.renders.is_empty());
}

#[test]
fn test_redirected_stream_flag() {
    let mut engine = Recorder::default();
    run(&[], StdinKind::Redirected, &mut engine);

    assert_eq!(engine.streams, vec![1]);
    assert!(engine.renders.is_empty());
}

#[test]
fn test_stream_status_is_exit_status() {
    for expected in [0, 1, 2] {
        let mut engine = Recorder::returning(expected);
        assert_eq!(run(&[], StdinKind::Redirected, &mut engine), expected);
    }
}

#[test]
fn test_render_ignores_engine_status() {
    let mut engine = Recorder::returning(2);
    assert_eq!(run(&["x"], StdinKind::Redirected, &mut engine), 0);
}

#[test]
fn test_multibyte_length() {
    let mut engine = Recorder::default();
    run(&["héllo", "wörld"], StdinKind::Terminal, &mut engine);

    let (buffer, _) = &engine.renders[0];
    assert_eq!(buffer.len(), "héllo wörld".len());
    assert_eq!(buffer.len(), 13);
}

#[test]
fn test_render_error_propagates() {
    struct Failing;

    impl Engine for Failing {
        fn render_buffer(&mut self, _input: &[u8], _mode: RenderMode) -> tmd::Result<()> {
            Err(tmd::Error::InputTooLarge(usize::MAX))
        }

        fn process_stream(&mut self, _stdin: StdinKind) -> i32 {
            unreachable!("stream called with arguments present")
        }
    }

    let result = Invocation::from_args(["text"], || StdinKind::Terminal).run(&mut Failing);
    let err = result.unwrap_err();
    assert!(matches!(err, tmd::Error::InputTooLarge(_)));
    assert!(err.to_string().contains("too large"), "Got: {err}");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_bytes_pass_through() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let args = vec![OsString::from_vec(vec![0xff, b'a']), OsString::from("b")];
    let mut engine = Recorder::default();
    Invocation::from_args(args, || StdinKind::Terminal)
        .run(&mut engine)
        .unwrap();

    assert_eq!(engine.renders[0].0, vec![0xff, b'a', b' ', b'b']);
}

proptest! {
    #[test]
    fn prop_join_matches_space_separated(args in prop::collection::vec(".{0,12}", 1..8)) {
        let expected = args.join(" ");
        let mut engine = Recorder::default();
        let status = Invocation::from_args(args.clone(), || StdinKind::Terminal)
            .run(&mut engine)
            .unwrap();

        prop_assert_eq!(status, 0);
        prop_assert!(engine.streams.is_empty());
        prop_assert_eq!(engine.renders.len(), 1);
        prop_assert_eq!(&engine.renders[0].0, expected.as_bytes());
        prop_assert_eq!(engine.renders[0].0.len(), expected.len());
    }

    #[test]
    fn prop_exactly_one_call(args in prop::collection::vec("[a-z]{1,6}", 0..4), terminal: bool) {
        let stdin = if terminal { StdinKind::Terminal } else { StdinKind::Redirected };
        let mut engine = Recorder::default();
        Invocation::from_args(args.clone(), || stdin)
            .run(&mut engine)
            .unwrap();

        prop_assert_eq!(engine.renders.len() + engine.streams.len(), 1);
        prop_assert_eq!(engine.renders.len(), usize::from(!args.is_empty()));
    }
}
