use std::collections::{BTreeMap, BTreeSet};

use super::domain::{Challenge, ChallengeId, Difficulty, Language, TestCase};

/// Filter along the difficulty axis. `All` is the identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DifficultyFilter {
    #[default]
    All,
    Only(Difficulty),
}

impl DifficultyFilter {
    /// Parse the query form: missing or `all` keeps the identity filter.
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value {
            None => Some(DifficultyFilter::All),
            Some(raw) if raw.trim().eq_ignore_ascii_case("all") => Some(DifficultyFilter::All),
            Some(raw) => Difficulty::parse(raw).map(DifficultyFilter::Only),
        }
    }

    fn matches(self, challenge: &Challenge) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Only(difficulty) => challenge.difficulty == difficulty,
        }
    }
}

/// Filter along the tag axis. `All` is the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Only(String),
}

impl TagFilter {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None => TagFilter::All,
            Some(raw) if raw.trim().eq_ignore_ascii_case("all") => TagFilter::All,
            Some(raw) => TagFilter::Only(raw.trim().to_string()),
        }
    }

    fn matches(&self, challenge: &Challenge) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Only(tag) => challenge.has_tag(tag),
        }
    }
}

/// The two axes compose by logical AND over the full catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilter {
    pub difficulty: DifficultyFilter,
    pub tag: TagFilter,
}

impl CatalogFilter {
    pub fn matches(&self, challenge: &Challenge) -> bool {
        self.difficulty.matches(challenge) && self.tag.matches(challenge)
    }
}

/// Immutable challenge bank, assembled once at startup.
#[derive(Debug, Clone)]
pub struct ChallengeCatalog {
    entries: Vec<Challenge>,
}

impl ChallengeCatalog {
    pub fn new(entries: Vec<Challenge>) -> Self {
        Self { entries }
    }

    /// The stock catalog shipped with the lab.
    pub fn standard() -> Self {
        Self::new(vec![
            two_sum(),
            valid_parentheses(),
            level_order_traversal(),
            coin_change(),
        ])
    }

    pub fn entries(&self) -> &[Challenge] {
        &self.entries
    }

    pub fn get(&self, id: &ChallengeId) -> Option<&Challenge> {
        self.entries.iter().find(|challenge| &challenge.id == id)
    }

    pub fn filtered(&self, filter: &CatalogFilter) -> Vec<&Challenge> {
        self.entries
            .iter()
            .filter(|challenge| filter.matches(challenge))
            .collect()
    }

    /// Every tag present in the catalog, for the filter chips.
    pub fn tags(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .flat_map(|challenge| challenge.tags.iter().cloned())
            .collect()
    }
}

fn tags(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|tag| tag.to_string()).collect()
}

fn case(input: &str, expected: &str) -> TestCase {
    TestCase {
        input: input.to_string(),
        expected: expected.to_string(),
        hidden: false,
    }
}

fn hidden_case(input: &str, expected: &str) -> TestCase {
    TestCase {
        input: input.to_string(),
        expected: expected.to_string(),
        hidden: true,
    }
}

fn starter(snippets: &[(Language, &str)]) -> BTreeMap<Language, String> {
    snippets
        .iter()
        .map(|(language, code)| (*language, code.to_string()))
        .collect()
}

fn two_sum() -> Challenge {
    Challenge {
        id: ChallengeId("two-sum".to_string()),
        title: "Two Sum".to_string(),
        difficulty: Difficulty::Easy,
        tags: tags(&["arrays", "hash-map"]),
        test_cases: vec![
            case("nums = [2,7,11,15], target = 9", "[0,1]"),
            case("nums = [3,2,4], target = 6", "[1,2]"),
            hidden_case("nums = [3,3], target = 6", "[0,1]"),
        ],
        starter_code: starter(&[
            (
                Language::Python,
                "def two_sum(nums, target):\n    # Write your solution here\n    pass\n",
            ),
            (
                Language::Javascript,
                "function twoSum(nums, target) {\n  // Write your solution here\n}\n",
            ),
            (
                Language::Java,
                "class Solution {\n    public int[] twoSum(int[] nums, int target) {\n        // Write your solution here\n        return new int[0];\n    }\n}\n",
            ),
            (
                Language::Cpp,
                "vector<int> twoSum(vector<int>& nums, int target) {\n    // Write your solution here\n    return {};\n}\n",
            ),
        ]),
        points: 100,
        success_rate: 0.68,
        submissions: 4821,
    }
}

fn valid_parentheses() -> Challenge {
    Challenge {
        id: ChallengeId("valid-parentheses".to_string()),
        title: "Valid Parentheses".to_string(),
        difficulty: Difficulty::Easy,
        tags: tags(&["stacks", "strings"]),
        test_cases: vec![
            case("s = \"()[]{}\"", "true"),
            case("s = \"(]\"", "false"),
            hidden_case("s = \"([)]\"", "false"),
        ],
        starter_code: starter(&[
            (
                Language::Python,
                "def is_valid(s):\n    # Write your solution here\n    pass\n",
            ),
            (
                Language::Javascript,
                "function isValid(s) {\n  // Write your solution here\n}\n",
            ),
            (
                Language::Java,
                "class Solution {\n    public boolean isValid(String s) {\n        // Write your solution here\n        return false;\n    }\n}\n",
            ),
            (
                Language::Cpp,
                "bool isValid(string s) {\n    // Write your solution here\n    return false;\n}\n",
            ),
        ]),
        points: 100,
        success_rate: 0.74,
        submissions: 3966,
    }
}

fn level_order_traversal() -> Challenge {
    Challenge {
        id: ChallengeId("level-order-traversal".to_string()),
        title: "Binary Tree Level Order Traversal".to_string(),
        difficulty: Difficulty::Medium,
        tags: tags(&["trees", "bfs"]),
        test_cases: vec![
            case("root = [3,9,20,null,null,15,7]", "[[3],[9,20],[15,7]]"),
            case("root = [1]", "[[1]]"),
            hidden_case("root = []", "[]"),
        ],
        starter_code: starter(&[
            (
                Language::Python,
                "def level_order(root):\n    # Write your solution here\n    pass\n",
            ),
            (
                Language::Javascript,
                "function levelOrder(root) {\n  // Write your solution here\n}\n",
            ),
            (
                Language::Java,
                "class Solution {\n    public List<List<Integer>> levelOrder(TreeNode root) {\n        // Write your solution here\n        return new ArrayList<>();\n    }\n}\n",
            ),
            (
                Language::Cpp,
                "vector<vector<int>> levelOrder(TreeNode* root) {\n    // Write your solution here\n    return {};\n}\n",
            ),
        ]),
        points: 200,
        success_rate: 0.51,
        submissions: 2214,
    }
}

fn coin_change() -> Challenge {
    Challenge {
        id: ChallengeId("coin-change".to_string()),
        title: "Dynamic Programming: Coin Change".to_string(),
        difficulty: Difficulty::Hard,
        tags: tags(&["dynamic-programming", "arrays"]),
        test_cases: vec![
            case("coins = [1,2,5], amount = 11", "3"),
            case("coins = [2], amount = 3", "-1"),
            hidden_case("coins = [1], amount = 0", "0"),
            hidden_case("coins = [186,419,83,408], amount = 6249", "20"),
        ],
        starter_code: starter(&[
            (
                Language::Python,
                "def coin_change(coins, amount):\n    # Write your solution here\n    pass\n",
            ),
            (
                Language::Javascript,
                "function coinChange(coins, amount) {\n  // Write your solution here\n}\n",
            ),
            (
                Language::Java,
                "class Solution {\n    public int coinChange(int[] coins, int amount) {\n        // Write your solution here\n        return -1;\n    }\n}\n",
            ),
            (
                Language::Cpp,
                "int coinChange(vector<int>& coins, int amount) {\n    // Write your solution here\n    return -1;\n}\n",
            ),
        ]),
        points: 300,
        success_rate: 0.32,
        submissions: 1407,
    }
}
