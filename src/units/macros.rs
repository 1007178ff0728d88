/// 차원별 단위 enum 과 `Unit` 구현, 이름 붙은 생성/변환 메서드를 만든다.
///
/// 각 단위 항목은 `변형(기호, 변환규칙) => 생성메서드, 변환메서드;` 형식이다.
/// `constraint = none` 인 차원은 `Unconstrained` 를 구현하고 생성 메서드가 값을 바로
/// 반환하며, 제약이 있는 차원은 `Result` 를 반환한다.
macro_rules! unit_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $dim:ident {
            base = $base:ident,
            digits = $digits:expr,
            constraint = none,
            $( $(#[$vmeta:meta])* $variant:ident($symbol:literal, $conv:expr) => $of:ident, $to:ident; )+
        }
    ) => {
        unit_enum!(@define
            $(#[$meta])* $name, $dim, $base, $digits,
            $crate::validation::Constraint::None,
            [ $( $(#[$vmeta])* $variant($symbol, $conv) => $to; )+ ]
        );

        impl $crate::units::Unconstrained for $name {}

        impl $crate::quantity::Quantity<$name> {
            $(
                #[doc = concat!("`", $symbol, "` 값으로 생성한다.")]
                pub fn $of(value: f64) -> Self {
                    Self::of(value, $name::$variant)
                }
            )+
        }
    };

    (
        $(#[$meta:meta])*
        pub enum $name:ident : $dim:ident {
            base = $base:ident,
            digits = $digits:expr,
            constraint = $constraint:path,
            $( $(#[$vmeta:meta])* $variant:ident($symbol:literal, $conv:expr) => $of:ident, $to:ident; )+
        }
    ) => {
        unit_enum!(@define
            $(#[$meta])* $name, $dim, $base, $digits,
            $constraint,
            [ $( $(#[$vmeta])* $variant($symbol, $conv) => $to; )+ ]
        );

        impl $crate::quantity::Quantity<$name> {
            $(
                #[doc = concat!("`", $symbol, "` 값으로 생성한다. 물리적 제약을 검사한다.")]
                pub fn $of(value: f64) -> Result<Self, $crate::error::QuantityError> {
                    Self::of_validated(value, $name::$variant)
                }
            )+
        }
    };

    (@define
        $(#[$meta:meta])* $name:ident, $dim:ident, $base:ident, $digits:expr, $constraint:expr,
        [ $( $(#[$vmeta:meta])* $variant:ident($symbol:literal, $conv:expr) => $to:ident; )+ ]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// 차원의 모든 단위. 첫 항목이 기준 단위이다.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];
        }

        impl $crate::units::Unit for $name {
            const DIMENSION: $crate::dimension::Dimension = $crate::dimension::Dimension::$dim;
            const BASE: Self = $name::$base;
            const DEFAULT_DIGITS: usize = $digits;
            const CONSTRAINT: $crate::validation::Constraint = $constraint;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn symbol(self) -> &'static str {
                match self {
                    $( $name::$variant => $symbol, )+
                }
            }

            fn conversion(self) -> $crate::units::Conversion {
                match self {
                    $( $name::$variant => $conv, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::units::Unit::symbol(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::QuantityError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::units::Unit>::from_symbol(s)
            }
        }

        impl $crate::quantity::Quantity<$name> {
            $(
                #[doc = concat!("`", $symbol, "` 단위로 변환한다.")]
                pub fn $to(&self) -> Self {
                    self.to_unit($name::$variant)
                }
            )+
        }
    };
}
