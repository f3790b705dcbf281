// Code generated by ghmock-gen; DO NOT EDIT.

use crate::endpoint::EndpointPattern;

pub const GET_SLASH: EndpointPattern = EndpointPattern::new("GET", "/");

pub const GET_GISTS: EndpointPattern = EndpointPattern::new("GET", "/gists");

pub const POST_GISTS: EndpointPattern = EndpointPattern::new("POST", "/gists");

pub const DELETE_GISTS_BY_GIST_ID: EndpointPattern =
    EndpointPattern::new("DELETE", "/gists/{gist_id}");

pub const GET_GISTS_BY_GIST_ID: EndpointPattern = EndpointPattern::new("GET", "/gists/{gist_id}");

pub const PATCH_GISTS_BY_GIST_ID: EndpointPattern =
    EndpointPattern::new("PATCH", "/gists/{gist_id}");

pub const GET_META: EndpointPattern = EndpointPattern::new("GET", "/meta");

pub const GET_ORGS_BY_ORG: EndpointPattern = EndpointPattern::new("GET", "/orgs/{org}");

pub const PATCH_ORGS_BY_ORG: EndpointPattern = EndpointPattern::new("PATCH", "/orgs/{org}");

pub const GET_ORGS_ACTIONS_RUNNER_GROUPS_BY_ORG: EndpointPattern =
    EndpointPattern::new("GET", "/orgs/{org}/actions/runner-groups");

pub const POST_ORGS_ACTIONS_RUNNER_GROUPS_BY_ORG: EndpointPattern =
    EndpointPattern::new("POST", "/orgs/{org}/actions/runner-groups");

pub const DELETE_ORGS_ACTIONS_SECRETS_BY_ORG_BY_SECRET_NAME: EndpointPattern =
    EndpointPattern::new("DELETE", "/orgs/{org}/actions/secrets/{secret_name}");

pub const GET_ORGS_ACTIONS_SECRETS_BY_ORG_BY_SECRET_NAME: EndpointPattern =
    EndpointPattern::new("GET", "/orgs/{org}/actions/secrets/{secret_name}");

pub const PUT_ORGS_ACTIONS_SECRETS_BY_ORG_BY_SECRET_NAME: EndpointPattern =
    EndpointPattern::new("PUT", "/orgs/{org}/actions/secrets/{secret_name}");

pub const GET_ORGS_MEMBERS_BY_ORG: EndpointPattern =
    EndpointPattern::new("GET", "/orgs/{org}/members");

pub const GET_ORGS_PROJECTS_BY_ORG: EndpointPattern =
    EndpointPattern::new("GET", "/orgs/{org}/projects");

pub const POST_ORGS_PROJECTS_BY_ORG: EndpointPattern =
    EndpointPattern::new("POST", "/orgs/{org}/projects");

pub const GET_ORGS_REPOS_BY_ORG: EndpointPattern = EndpointPattern::new("GET", "/orgs/{org}/repos");

pub const POST_ORGS_REPOS_BY_ORG: EndpointPattern =
    EndpointPattern::new("POST", "/orgs/{org}/repos");

pub const GET_ORGS_TEAMS_BY_ORG: EndpointPattern = EndpointPattern::new("GET", "/orgs/{org}/teams");

pub const POST_ORGS_TEAMS_BY_ORG: EndpointPattern =
    EndpointPattern::new("POST", "/orgs/{org}/teams");

pub const GET_ORGS_TEAMS_REPOS_BY_ORG_BY_TEAM_SLUG: EndpointPattern =
    EndpointPattern::new("GET", "/orgs/{org}/teams/{team_slug}/repos");

pub const GET_RATE_LIMIT: EndpointPattern = EndpointPattern::new("GET", "/rate_limit");

pub const DELETE_REPOS_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("DELETE", "/repos/{owner}/{repo}");

pub const GET_REPOS_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}");

pub const PATCH_REPOS_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("PATCH", "/repos/{owner}/{repo}");

pub const GET_REPOS_ACTIONS_RUNS_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/actions/runs");

pub const POST_REPOS_ACTIONS_WORKFLOWS_DISPATCHES_BY_OWNER_BY_REPO_BY_WORKFLOW_ID: EndpointPattern =
    EndpointPattern::new(
        "POST",
        "/repos/{owner}/{repo}/actions/workflows/{workflow_id}/dispatches",
    );

pub const GET_REPOS_BRANCHES_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/branches");

pub const GET_REPOS_BRANCHES_BY_OWNER_BY_REPO_BY_BRANCH: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/branches/{branch}");

pub const DELETE_REPOS_COLLABORATORS_BY_OWNER_BY_REPO_BY_USERNAME: EndpointPattern =
    EndpointPattern::new("DELETE", "/repos/{owner}/{repo}/collaborators/{username}");

pub const GET_REPOS_COLLABORATORS_BY_OWNER_BY_REPO_BY_USERNAME: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/collaborators/{username}");

pub const PUT_REPOS_COLLABORATORS_BY_OWNER_BY_REPO_BY_USERNAME: EndpointPattern =
    EndpointPattern::new("PUT", "/repos/{owner}/{repo}/collaborators/{username}");

pub const GET_REPOS_COMMITS_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/commits");

pub const GET_REPOS_COMMITS_BY_OWNER_BY_REPO_BY_REF: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/commits/{ref}");

pub const DELETE_REPOS_CONTENTS_BY_OWNER_BY_REPO_BY_PATH: EndpointPattern =
    EndpointPattern::new("DELETE", "/repos/{owner}/{repo}/contents/{path}");

pub const GET_REPOS_CONTENTS_BY_OWNER_BY_REPO_BY_PATH: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/contents/{path}");

pub const PUT_REPOS_CONTENTS_BY_OWNER_BY_REPO_BY_PATH: EndpointPattern =
    EndpointPattern::new("PUT", "/repos/{owner}/{repo}/contents/{path}");

pub const DELETE_REPOS_GIT_REFS_BY_OWNER_BY_REPO_BY_REF: EndpointPattern =
    EndpointPattern::new("DELETE", "/repos/{owner}/{repo}/git/refs/{ref}");

pub const PATCH_REPOS_GIT_REFS_BY_OWNER_BY_REPO_BY_REF: EndpointPattern =
    EndpointPattern::new("PATCH", "/repos/{owner}/{repo}/git/refs/{ref}");

pub const GET_REPOS_HOOKS_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/hooks");

pub const POST_REPOS_HOOKS_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("POST", "/repos/{owner}/{repo}/hooks");

pub const GET_REPOS_ISSUES_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/issues");

pub const POST_REPOS_ISSUES_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("POST", "/repos/{owner}/{repo}/issues");

pub const GET_REPOS_ISSUES_BY_OWNER_BY_REPO_BY_ISSUE_NUMBER: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/issues/{issue_number}");

pub const PATCH_REPOS_ISSUES_BY_OWNER_BY_REPO_BY_ISSUE_NUMBER: EndpointPattern =
    EndpointPattern::new("PATCH", "/repos/{owner}/{repo}/issues/{issue_number}");

pub const GET_REPOS_ISSUES_COMMENTS_BY_OWNER_BY_REPO_BY_ISSUE_NUMBER: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/issues/{issue_number}/comments");

pub const POST_REPOS_ISSUES_COMMENTS_BY_OWNER_BY_REPO_BY_ISSUE_NUMBER: EndpointPattern =
    EndpointPattern::new("POST", "/repos/{owner}/{repo}/issues/{issue_number}/comments");

pub const GET_REPOS_PULLS_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/pulls");

pub const POST_REPOS_PULLS_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("POST", "/repos/{owner}/{repo}/pulls");

pub const GET_REPOS_PULLS_BY_OWNER_BY_REPO_BY_PULL_NUMBER: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/pulls/{pull_number}");

pub const PATCH_REPOS_PULLS_BY_OWNER_BY_REPO_BY_PULL_NUMBER: EndpointPattern =
    EndpointPattern::new("PATCH", "/repos/{owner}/{repo}/pulls/{pull_number}");

pub const GET_REPOS_PULLS_FILES_BY_OWNER_BY_REPO_BY_PULL_NUMBER: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/pulls/{pull_number}/files");

pub const GET_REPOS_PULLS_MERGE_BY_OWNER_BY_REPO_BY_PULL_NUMBER: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/pulls/{pull_number}/merge");

pub const PUT_REPOS_PULLS_MERGE_BY_OWNER_BY_REPO_BY_PULL_NUMBER: EndpointPattern =
    EndpointPattern::new("PUT", "/repos/{owner}/{repo}/pulls/{pull_number}/merge");

pub const GET_REPOS_RELEASES_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/releases");

pub const POST_REPOS_RELEASES_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("POST", "/repos/{owner}/{repo}/releases");

pub const GET_REPOS_RELEASES_LATEST_BY_OWNER_BY_REPO: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/releases/latest");

pub const DELETE_REPOS_RELEASES_BY_OWNER_BY_REPO_BY_RELEASE_ID: EndpointPattern =
    EndpointPattern::new("DELETE", "/repos/{owner}/{repo}/releases/{release_id}");

pub const GET_REPOS_RELEASES_BY_OWNER_BY_REPO_BY_RELEASE_ID: EndpointPattern =
    EndpointPattern::new("GET", "/repos/{owner}/{repo}/releases/{release_id}");

pub const PATCH_REPOS_RELEASES_BY_OWNER_BY_REPO_BY_RELEASE_ID: EndpointPattern =
    EndpointPattern::new("PATCH", "/repos/{owner}/{repo}/releases/{release_id}");

pub const GET_SEARCH_CODE: EndpointPattern = EndpointPattern::new("GET", "/search/code");

pub const GET_SEARCH_ISSUES: EndpointPattern = EndpointPattern::new("GET", "/search/issues");

pub const GET_SEARCH_REPOSITORIES: EndpointPattern =
    EndpointPattern::new("GET", "/search/repositories");

pub const GET_USER: EndpointPattern = EndpointPattern::new("GET", "/user");

pub const PATCH_USER: EndpointPattern = EndpointPattern::new("PATCH", "/user");

pub const GET_USER_ORGS: EndpointPattern = EndpointPattern::new("GET", "/user/orgs");

pub const GET_USER_REPOS: EndpointPattern = EndpointPattern::new("GET", "/user/repos");

pub const POST_USER_REPOS: EndpointPattern = EndpointPattern::new("POST", "/user/repos");

pub const GET_USERS_BY_USERNAME: EndpointPattern = EndpointPattern::new("GET", "/users/{username}");

pub const GET_USERS_FOLLOWERS_BY_USERNAME: EndpointPattern =
    EndpointPattern::new("GET", "/users/{username}/followers");

pub const GET_USERS_REPOS_BY_USERNAME: EndpointPattern =
    EndpointPattern::new("GET", "/users/{username}/repos");
