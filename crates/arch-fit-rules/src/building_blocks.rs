//! Building-block isolation rules.
//!
//! Building blocks are the cross-cutting `{root}.BuildingBlocks.{Layer}`
//! components. Among themselves they follow the layer order, and only the
//! matching outer layer may reach the Api and Infrastructure blocks.

use crate::dependency::{DependencyRule, Selector};
use arch_fit_core::Layer::{Api, Application, Domain, Infrastructure};

use Selector::{AllExcept, BuildingBlock};

/// AF201
pub const BUILDING_BLOCKS_DOMAIN_ISOLATED: DependencyRule = DependencyRule::new(
    "AF201",
    "building-blocks-domain-isolated",
    "The Domain building block must not depend on any other building block",
    BuildingBlock(Domain),
    &[
        BuildingBlock(Application),
        BuildingBlock(Infrastructure),
        BuildingBlock(Api),
    ],
);

/// AF202
pub const BUILDING_BLOCKS_APPLICATION_DEPENDS_ONLY_ON_DOMAIN: DependencyRule =
    DependencyRule::new(
        "AF202",
        "building-blocks-application-depends-only-on-domain",
        "The Application building block may only depend on the Domain building block",
        BuildingBlock(Application),
        &[BuildingBlock(Infrastructure), BuildingBlock(Api)],
    );

/// AF203
pub const BUILDING_BLOCKS_INFRASTRUCTURE_NOT_DEPEND_ON_API: DependencyRule = DependencyRule::new(
    "AF203",
    "building-blocks-infrastructure-not-depend-on-api",
    "The Infrastructure building block must not depend on the Api building block",
    BuildingBlock(Infrastructure),
    &[BuildingBlock(Api)],
);

/// AF204
pub const BUILDING_BLOCKS_API_NOT_DEPEND_ON_INFRASTRUCTURE: DependencyRule = DependencyRule::new(
    "AF204",
    "building-blocks-api-not-depend-on-infrastructure",
    "The Api building block must not depend on the Infrastructure building block",
    BuildingBlock(Api),
    &[BuildingBlock(Infrastructure)],
);

/// AF205
pub const ONLY_API_DEPENDS_ON_BUILDING_BLOCKS_API: DependencyRule = DependencyRule::new(
    "AF205",
    "only-api-depends-on-building-blocks-api",
    "Only Api components may depend on the Api building block",
    AllExcept(Api),
    &[BuildingBlock(Api)],
);

/// AF206
pub const ONLY_INFRASTRUCTURE_DEPENDS_ON_BUILDING_BLOCKS_INFRASTRUCTURE: DependencyRule =
    DependencyRule::new(
        "AF206",
        "only-infrastructure-depends-on-building-blocks-infrastructure",
        "Only Infrastructure components may depend on the Infrastructure building block",
        AllExcept(Infrastructure),
        &[BuildingBlock(Infrastructure)],
    );

/// All building-block rules, in code order.
pub const BUILDING_BLOCK_RULES: &[DependencyRule] = &[
    BUILDING_BLOCKS_DOMAIN_ISOLATED,
    BUILDING_BLOCKS_APPLICATION_DEPENDS_ONLY_ON_DOMAIN,
    BUILDING_BLOCKS_INFRASTRUCTURE_NOT_DEPEND_ON_API,
    BUILDING_BLOCKS_API_NOT_DEPEND_ON_INFRASTRUCTURE,
    ONLY_API_DEPENDS_ON_BUILDING_BLOCKS_API,
    ONLY_INFRASTRUCTURE_DEPENDS_ON_BUILDING_BLOCKS_INFRASTRUCTURE,
];
