//! # Coded Error Tests
//!
//! Cause-chain behaviour of `CodedError`: wrapping, unwrapping, codes,
//! equality, and opt-in stack printing.

use sqlbind::config::ErrorOptions;
use sqlbind::errors::{CodedError, CodedResultExt};
use sqlbind::{BindError, Code};

fn inner_most() -> Result<(), CodedError> {
    Err(CodedError::new(Code::Unknown, "foo").with_stack())
}

fn middle() -> Result<(), CodedError> {
    inner_most().wrap_coded("bar")
}

fn outer() -> Result<(), CodedError> {
    middle().wrap_coded_with(|| String::from("baz"))
}

mod chain_tests {
    use super::*;

    #[test]
    fn wrap_prefixes_and_keeps_code() {
        let err = CodedError::new(Code::AlreadyExists, "oops").wrap("client error");
        assert_eq!(err.to_string(), "client error: oops");
        assert_eq!(err.code(), Code::AlreadyExists);
    }

    #[test]
    fn wrap_of_formatted_message() {
        let err = CodedError::new(Code::Unknown, "EOF")
            .wrap(format!("read error with {} format specifier", 1))
            .wrap("client error");
        assert_eq!(
            err.to_string(),
            "client error: read error with 1 format specifier: EOF"
        );
    }

    #[test]
    fn unwrap_reports_whether_wrapped() {
        let leaves = [
            CodedError::new(Code::Unknown, "some error: 17"),
            CodedError::new(Code::InvalidArgument, format!("some msg {}", 19)),
        ];
        for leaf in leaves {
            let (was_wrapped, inner) = leaf.unwrap();
            assert!(!was_wrapped);
            assert_eq!(inner, &leaf);

            let wrapped = leaf.clone().wrap("some message");
            let (was_wrapped, inner) = wrapped.unwrap();
            assert!(was_wrapped);
            assert_eq!(inner, &leaf);
        }
    }

    #[test]
    fn unwrap_all_follows_chain_to_leaf() {
        let leaf = CodedError::new(Code::InvalidArgument, "some msg 19");
        let mut wrapped = leaf.clone();
        for _ in 0..5 {
            wrapped = wrapped.wrap("some message");
        }
        assert_eq!(wrapped.unwrap_all(), &leaf);
        assert_eq!(wrapped.root_cause(), &leaf);
        assert_eq!(wrapped.chain().count(), 6);
    }

    #[test]
    fn cause_is_one_level() {
        let leaf = CodedError::new(Code::FailedPrecondition, "error");
        assert!(leaf.cause().is_none());
        let wrapped = leaf.clone().wrap("ignored");
        assert_eq!(wrapped.cause(), Some(&leaf));
    }

    #[test]
    fn equality_depends_on_shape_and_messages() {
        let errs = [
            CodedError::new(Code::Unknown, "EOF"),
            CodedError::new(Code::AlreadyExists, "EOF"),
            CodedError::new(Code::InvalidArgument, "EOF"),
            CodedError::new(Code::Unknown, "EOF").wrap("EOF"),
            CodedError::new(Code::Unknown, "EOF").wrap(format!("EOF{}", 2)),
        ];
        for (i, a) in errs.iter().enumerate() {
            for (j, b) in errs.iter().enumerate() {
                assert_eq!(a == b, i == j, "{} vs {}", i, j);
            }
        }
    }

    #[test]
    fn std_error_source_walks_chain() {
        use std::error::Error;

        let err = CodedError::new(Code::Internal, "leaf").wrap("mid").wrap("top");
        let mut depth = 0;
        let mut current: Option<&dyn Error> = Some(&err);
        while let Some(e) = current {
            depth += 1;
            current = e.source();
        }
        assert_eq!(depth, 3);
    }
}

mod conversion_tests {
    use super::*;

    #[test]
    fn bind_error_keeps_message_and_code() {
        let err: CodedError = BindError::NilBindVariable.into();
        assert_eq!(err.code(), Code::InvalidArgument);
        assert_eq!(err.to_string(), "bind variable is nil");

        let err: CodedError = BindError::MalformedWire("unknown type tag: 3".into()).into();
        assert_eq!(err.code(), Code::Internal);
    }

    #[test]
    fn wrap_coded_leaves_ok_untouched() {
        let ok: Result<i32, BindError> = Ok(3);
        assert_eq!(ok.wrap_coded("no error"), Ok(3));
    }

    #[test]
    fn wrap_coded_converts_and_wraps() {
        let res: Result<(), BindError> = Err(BindError::NilBindVariable);
        let err = res.wrap_coded("binding query").unwrap_err();
        assert_eq!(err.to_string(), "binding query: bind variable is nil");
        assert_eq!(err.code(), Code::InvalidArgument);
    }
}

mod stack_tests {
    use super::*;

    #[test]
    fn message_chain_without_stacks() {
        let err = outer().unwrap_err();
        assert_eq!(err.to_string(), "baz: bar: foo");
        assert_eq!(
            err.display_with(ErrorOptions::default()).to_string(),
            "baz: bar: foo"
        );
    }

    #[test]
    fn stacks_only_with_option() {
        let err = outer().unwrap_err();
        assert!(err.root_cause().stack().is_some());
        let with = err.display_with(ErrorOptions::with_stacks()).to_string();
        assert!(with.starts_with("baz: bar: foo\n"));
        assert!(with.len() > "baz: bar: foo".len());
    }

    #[test]
    fn stack_is_not_identity() {
        let a = CodedError::new(Code::Unknown, "foo");
        let b = CodedError::new(Code::Unknown, "foo").with_stack();
        assert_eq!(a, b);
    }
}
