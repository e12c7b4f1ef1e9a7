/// Declare a closed code value set as a Rust enum serialised by its codes.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident = $value_set:literal {
            $($variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $crate::model::CodeEnum for $name {
            const VALUE_SET: &'static str = $value_set;
            const CODES: &'static [&'static str] = &[$($code),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::model::CodeEnum::as_str(self))
            }
        }
    };
}

/// Wire a typed record to the schema of the same name.
macro_rules! fhir_type {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::model::FhirTypeName for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);
            }

            impl $crate::model::FhirType for $ty {}
        )+
    };
}

/// Like `fhir_type!`, for top-level resources carrying a `resourceType`
/// discriminant and a flattened `domain` base.
macro_rules! fhir_resource {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::model::FhirTypeName for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);
                const IS_RESOURCE: bool = true;
            }

            impl $crate::model::FhirType for $ty {}

            impl $crate::model::FhirResource for $ty {
                fn domain(&self) -> &$crate::datatypes::DomainResource {
                    &self.domain
                }

                fn domain_mut(&mut self) -> &mut $crate::datatypes::DomainResource {
                    &mut self.domain
                }
            }

            impl From<$ty> for $crate::resources::AnyResource {
                fn from(resource: $ty) -> Self {
                    Self::$ty(Box::new(resource))
                }
            }
        )+
    };
}
