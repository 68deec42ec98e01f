//! KUnit Template Provider
//!
//! Default skeletons for a kernel KUnit test: a Kconfig entry, a kbuild line
//! and a C test suite with one example case.

use crate::domain::ports::{Skeletons, TemplateProvider};
use crate::domain::value_objects::config_symbol_for;

const NAMESPACE: &str = "{{namespace}}";
const SUITE: &str = "{{suite}}";
const KCONFIG_NAME: &str = "{{kconfig_name}}";
const TEST_OBJECT: &str = "{{test_object}}";

const KCONFIG_TEMPLATE: &str = r#"config {{kconfig_name}}
	tristate "KUnit test for {{namespace}}" if !KUNIT_ALL_TESTS
	depends on KUNIT
	default KUNIT_ALL_TESTS
	help
	  This builds the {{suite}} KUnit test suite ({{test_object}}).

	  For more information on KUnit and unit tests in general, please refer
	  to the KUnit documentation in Documentation/dev-tools/kunit/.

	  If unsure, say N."#;

const TEST_TEMPLATE: &str = r#"// SPDX-License-Identifier: GPL-2.0
/*
 * KUnit test suite for {{namespace}}
 */

#include <kunit/test.h>

/*
 * A test case makes EXPECTATIONs and ASSERTIONs about the code under test;
 * the case fails if any of them is not met.
 */
static void {{namespace}}_example_test(struct kunit *test)
{
	/* replace with expectations on {{namespace}} */
	KUNIT_EXPECT_EQ(test, 1, 1);
}

static int {{namespace}}_test_init(struct kunit *test)
{
	return 0;
}

static void {{namespace}}_test_exit(struct kunit *test)
{
}

static struct kunit_case {{namespace}}_test_cases[] = {
	KUNIT_CASE({{namespace}}_example_test),
	{}
};

static struct kunit_suite {{namespace}}_test_module = {
	.name = "{{suite}}",
	.init = {{namespace}}_test_init,
	.exit = {{namespace}}_test_exit,
	.test_cases = {{namespace}}_test_cases,
};

kunit_test_suites(&{{namespace}}_test_module);

MODULE_LICENSE("GPL v2");
"#;

/// Built-in KUnit skeletons.
#[derive(Debug, Clone, Copy, Default)]
pub struct KunitTemplates;

impl KunitTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateProvider for KunitTemplates {
    fn produce(&self, namespace: &str, test_object: &str) -> Skeletons {
        let config_symbol = config_symbol_for(namespace);
        let kconfig_name = config_symbol
            .strip_prefix("CONFIG_")
            .unwrap_or(&config_symbol);
        let suite = format!("{}-test", namespace.replace('_', "-"));

        let render = |template: &str| {
            template
                .replace(KCONFIG_NAME, kconfig_name)
                .replace(TEST_OBJECT, test_object)
                .replace(SUITE, &suite)
                .replace(NAMESPACE, namespace)
        };

        Skeletons {
            config_block: render(KCONFIG_TEMPLATE),
            build_rule: format!("obj-$({config_symbol})\t\t+= {test_object}\n"),
            source: render(TEST_TEMPLATE),
        }
    }
}
