// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative macros shared by the record types

/// `Display` for enums whose variants render as fixed strings.
///
/// ```ignore
/// crate::simple_display! {
///     PermissionMode {
///         Private => "private",
///         Shared => "shared",
///     }
/// }
/// ```
#[macro_export]
macro_rules! simple_display {
    ($enum:ty { $( $variant:ident $(( $($ignore:tt)* ))? => $str:expr ),+ $(,)? }) => {
        impl std::fmt::Display for $enum {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self {
                    $( Self::$variant $(( $($ignore)* ))? => $str, )+
                })
            }
        }
    };
}

/// Test builder for a record: a default for every field, one chained setter
/// per field, then `build()`. Only compiled for tests and `test-support`.
///
/// `into` setters take `impl Into<T>`; `set` setters take `T` as-is.
///
/// ```ignore
/// crate::builder! {
///     pub struct WorkspaceBuilder => Workspace {
///         into { title: String = "Engineering" }
///         set { logo: Option<String> = None }
///     }
/// }
/// ```
#[macro_export]
macro_rules! builder {
    (
        pub struct $builder:ident => $target:ident {
            into { $( $into:ident : $into_ty:ty = $into_default:expr ),* $(,)? }
            set { $( $set:ident : $set_ty:ty = $set_default:expr ),* $(,)? }
        }
    ) => {
        #[cfg(any(test, feature = "test-support"))]
        pub struct $builder {
            inner: $target,
        }

        #[cfg(any(test, feature = "test-support"))]
        impl Default for $builder {
            fn default() -> Self {
                Self {
                    inner: $target {
                        $( $into: $into_default.into(), )*
                        $( $set: $set_default, )*
                    },
                }
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $builder {
            $(
                pub fn $into(mut self, v: impl Into<$into_ty>) -> Self {
                    self.inner.$into = v.into();
                    self
                }
            )*

            $(
                pub fn $set(mut self, v: $set_ty) -> Self {
                    self.inner.$set = v;
                    self
                }
            )*

            pub fn build(self) -> $target {
                self.inner
            }
        }

        #[cfg(any(test, feature = "test-support"))]
        impl $target {
            /// Builder preloaded with test defaults.
            pub fn builder() -> $builder {
                $builder::default()
            }
        }
    };
}

/// Chained `Option` setters inside an existing `impl` block.
///
/// Each setter wraps its argument in `Some(v.into())`.
///
/// ```ignore
/// impl User {
///     tandem_core::setters! {
///         option { full_name: String }
///     }
/// }
/// ```
#[macro_export]
macro_rules! setters {
    (option { $( $field:ident : $ty:ty ),* $(,)? }) => {
        $(
            pub fn $field(mut self, v: impl Into<$ty>) -> Self {
                self.$field = Some(v.into());
                self
            }
        )*
    };
}
