//! Layering rules: inner layers never reach outward.
//!
//! Subjects are whole layer buckets, building blocks included, and only
//! direct edges count.

use crate::dependency::{DependencyRule, Selector};
use arch_fit_core::Layer::{Api, Application, Domain, Infrastructure};

use Selector::{BuildingBlock, Layer};

/// AF101
pub const API_NOT_DEPEND_ON_DOMAIN: DependencyRule = DependencyRule::new(
    "AF101",
    "api-not-depend-on-domain",
    "Api components must not depend on Domain components",
    Layer(Api),
    &[Layer(Domain)],
);

/// AF102
pub const API_NOT_DEPEND_ON_INFRASTRUCTURE: DependencyRule = DependencyRule::new(
    "AF102",
    "api-not-depend-on-infrastructure",
    "Api components must not depend on Infrastructure components",
    Layer(Api),
    &[Layer(Infrastructure)],
);

/// AF103
pub const DOMAIN_NOT_DEPEND_ON_APPLICATION: DependencyRule = DependencyRule::new(
    "AF103",
    "domain-not-depend-on-application",
    "Domain components must not depend on Application components",
    Layer(Domain),
    &[Layer(Application)],
);

/// AF104
pub const DOMAIN_NOT_DEPEND_ON_INFRASTRUCTURE: DependencyRule = DependencyRule::new(
    "AF104",
    "domain-not-depend-on-infrastructure",
    "Domain components must not depend on Infrastructure components",
    Layer(Domain),
    &[Layer(Infrastructure)],
);

/// AF105
pub const DOMAIN_NOT_DEPEND_ON_API: DependencyRule = DependencyRule::new(
    "AF105",
    "domain-not-depend-on-api",
    "Domain components must not depend on Api components",
    Layer(Domain),
    &[Layer(Api)],
);

/// AF106
pub const APPLICATION_NOT_DEPEND_ON_API_OR_INFRASTRUCTURE: DependencyRule = DependencyRule::new(
    "AF106",
    "application-not-depend-on-api-or-infrastructure",
    "Application components must not depend on Api or Infrastructure components",
    Layer(Application),
    &[Layer(Api), Layer(Infrastructure)],
);

/// AF107
pub const INFRASTRUCTURE_NOT_DEPEND_ON_API: DependencyRule = DependencyRule::new(
    "AF107",
    "infrastructure-not-depend-on-api",
    "Infrastructure components must not depend on Api components",
    Layer(Infrastructure),
    &[Layer(Api)],
);

/// AF108
pub const DOMAIN_NOT_DEPEND_ON_OUTER_BUILDING_BLOCKS: DependencyRule = DependencyRule::new(
    "AF108",
    "domain-not-depend-on-outer-building-blocks",
    "Domain components must not depend on the Application, Infrastructure or Api building blocks",
    Layer(Domain),
    &[
        BuildingBlock(Application),
        BuildingBlock(Infrastructure),
        BuildingBlock(Api),
    ],
);

/// AF109
pub const APPLICATION_NOT_DEPEND_ON_OUTER_BUILDING_BLOCKS: DependencyRule = DependencyRule::new(
    "AF109",
    "application-not-depend-on-outer-building-blocks",
    "Application components must not depend on the Infrastructure or Api building blocks",
    Layer(Application),
    &[BuildingBlock(Infrastructure), BuildingBlock(Api)],
);

/// All layering rules, in code order.
pub const LAYERING_RULES: &[DependencyRule] = &[
    API_NOT_DEPEND_ON_DOMAIN,
    API_NOT_DEPEND_ON_INFRASTRUCTURE,
    DOMAIN_NOT_DEPEND_ON_APPLICATION,
    DOMAIN_NOT_DEPEND_ON_INFRASTRUCTURE,
    DOMAIN_NOT_DEPEND_ON_API,
    APPLICATION_NOT_DEPEND_ON_API_OR_INFRASTRUCTURE,
    INFRASTRUCTURE_NOT_DEPEND_ON_API,
    DOMAIN_NOT_DEPEND_ON_OUTER_BUILDING_BLOCKS,
    APPLICATION_NOT_DEPEND_ON_OUTER_BUILDING_BLOCKS,
];
